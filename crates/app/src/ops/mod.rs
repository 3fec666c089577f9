pub mod files;
pub mod init;
pub mod projects;
pub mod serve;
pub mod token;
pub mod version;
pub mod viewer;

pub use files::Files;
pub use init::Init;
pub use projects::Projects;
pub use serve::Serve;
pub use token::Token;
pub use version::Version;
pub use viewer::Viewer;
