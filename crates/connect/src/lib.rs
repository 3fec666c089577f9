pub mod api;
pub mod enumerate;
pub mod types;
pub mod viewer;

pub use api::{ApiClient, ApiError, ApiRequest};
pub use enumerate::{enumerate, EnumerateError, ProjectSource};
pub use types::{FileRecord, FolderItem, Project};
pub use viewer::build_viewer_html;

/// Base URL for the Trimble Connect US region.
pub const DEFAULT_REMOTE: &str = "https://app.connect.trimble.com";

/// Path prefix all API requests are issued under.
pub const API_PREFIX: &str = "/tc/api/2.0";
