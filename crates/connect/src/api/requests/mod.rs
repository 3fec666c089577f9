mod get_project;
mod list_folder_items;
mod list_projects;

pub use get_project::GetProject;
pub use list_folder_items::ListFolderItems;
pub use list_projects::ListProjects;
