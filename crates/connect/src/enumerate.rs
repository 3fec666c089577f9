use async_recursion::async_recursion;

use crate::api::requests::{GetProject, ListFolderItems};
use crate::api::{ApiClient, ApiError};
use crate::types::{FileRecord, FolderItem};

/// The two reads the traversal needs. `ApiClient` is the real source; tests
/// substitute an in-memory tree.
#[async_trait::async_trait]
pub trait ProjectSource {
    /// Root folder id from the project metadata, `None` when the project
    /// carries no root.
    async fn project_root(&self, project_id: &str) -> Result<Option<String>, ApiError>;

    /// Immediate children of a folder, in remote listing order.
    async fn folder_items(&self, folder_id: &str) -> Result<Vec<FolderItem>, ApiError>;
}

#[async_trait::async_trait]
impl ProjectSource for ApiClient {
    async fn project_root(&self, project_id: &str) -> Result<Option<String>, ApiError> {
        let project = self
            .call(GetProject {
                project_id: project_id.to_string(),
            })
            .await?;
        Ok(project.root_id)
    }

    async fn folder_items(&self, folder_id: &str) -> Result<Vec<FolderItem>, ApiError> {
        self.call(ListFolderItems {
            folder_id: folder_id.to_string(),
        })
        .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnumerateError {
    #[error("root folder not found for project {0}")]
    RootFolderNotFound(String),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Recursively list every file in a project.
///
/// Resolves the project's root folder, then walks the folder tree depth-first
/// with one listing call per folder, children processed in remote listing
/// order. Each call blocks the walk until its response arrives. Any failed
/// call aborts the whole traversal; no partial result is returned.
pub async fn enumerate<S: ProjectSource + Sync>(
    source: &S,
    project_id: &str,
) -> Result<Vec<FileRecord>, EnumerateError> {
    let root_id = source
        .project_root(project_id)
        .await?
        .ok_or_else(|| EnumerateError::RootFolderNotFound(project_id.to_string()))?;

    let files = walk_folder(source, &root_id, "").await?;
    tracing::debug!(project_id, files = files.len(), "project tree enumerated");
    Ok(files)
}

#[async_recursion]
async fn walk_folder<S: ProjectSource + Sync>(
    source: &S,
    folder_id: &str,
    current_path: &str,
) -> Result<Vec<FileRecord>, EnumerateError> {
    let items = source.folder_items(folder_id).await?;

    let mut files = Vec::new();
    for item in items {
        let item_path = join_path(current_path, &item.name);

        if item.is_folder() {
            files.extend(walk_folder(source, &item.id, &item_path).await?);
        } else {
            files.push(FileRecord {
                id: item.id.clone(),
                name: item.name.clone(),
                path: item_path,
                size: item.size,
                modified_at: item.modified().map(str::to_string),
                raw: item,
            });
        }
    }

    Ok(files)
}

/// `current/name` with leading slashes stripped, so items directly under the
/// root come out bare.
fn join_path(current: &str, name: &str) -> String {
    format!("{}/{}", current, name)
        .trim_start_matches('/')
        .to_string()
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    /// In-memory folder tree keyed by folder id.
    struct FakeSource {
        root_id: Option<String>,
        folders: HashMap<String, Vec<FolderItem>>,
        /// Folder ids whose listing call fails
        broken: Vec<String>,
    }

    impl FakeSource {
        fn new(root_id: Option<&str>) -> Self {
            Self {
                root_id: root_id.map(String::from),
                folders: HashMap::new(),
                broken: Vec::new(),
            }
        }

        fn with_folder(mut self, id: &str, items: Vec<FolderItem>) -> Self {
            self.folders.insert(id.to_string(), items);
            self
        }

        fn with_broken_folder(mut self, id: &str) -> Self {
            self.broken.push(id.to_string());
            self
        }
    }

    #[async_trait::async_trait]
    impl ProjectSource for FakeSource {
        async fn project_root(&self, _project_id: &str) -> Result<Option<String>, ApiError> {
            Ok(self.root_id.clone())
        }

        async fn folder_items(&self, folder_id: &str) -> Result<Vec<FolderItem>, ApiError> {
            if self.broken.iter().any(|b| b == folder_id) {
                return Err(ApiError::HttpStatus(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    "boom".to_string(),
                ));
            }
            Ok(self.folders.get(folder_id).cloned().unwrap_or_default())
        }
    }

    fn folder(id: &str, name: &str) -> FolderItem {
        FolderItem {
            id: id.to_string(),
            name: name.to_string(),
            item_type: Some("FOLDER".to_string()),
            entity_type: None,
            size: None,
            modified_at: None,
            modified_on: None,
            extra: serde_json::Map::new(),
        }
    }

    fn file(id: &str, name: &str) -> FolderItem {
        FolderItem {
            id: id.to_string(),
            name: name.to_string(),
            item_type: Some("FILE".to_string()),
            entity_type: None,
            size: Some(123),
            modified_at: Some("2025-12-16T12:34:56Z".to_string()),
            modified_on: None,
            extra: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn test_root_file_and_subfolder() {
        let source = FakeSource::new(Some("root"))
            .with_folder("root", vec![file("f1", "a.ifc"), folder("d1", "Sub")])
            .with_folder("d1", vec![file("f2", "b.ifc")]);

        let files = enumerate(&source, "proj").await.unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.ifc", "Sub/b.ifc"]);
        assert_eq!(files[0].id, "f1");
        assert_eq!(files[1].name, "b.ifc");
        assert_eq!(files[1].raw.id, "f2");
    }

    #[tokio::test]
    async fn test_path_join_at_depth() {
        let source = FakeSource::new(Some("root"))
            .with_folder("root", vec![folder("d1", "Models")])
            .with_folder("d1", vec![folder("d2", "Steel")])
            .with_folder("d2", vec![file("f1", "frame.ifc")]);

        let files = enumerate(&source, "proj").await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "Models/Steel/frame.ifc");
    }

    #[tokio::test]
    async fn test_leaf_count_across_depths() {
        let source = FakeSource::new(Some("root"))
            .with_folder(
                "root",
                vec![file("f1", "a"), folder("d1", "x"), folder("d2", "y")],
            )
            .with_folder("d1", vec![file("f2", "b"), file("f3", "c")])
            .with_folder("d2", vec![folder("d3", "z")])
            .with_folder("d3", vec![file("f4", "d")]);

        let files = enumerate(&source, "proj").await.unwrap();
        assert_eq!(files.len(), 4);
    }

    #[tokio::test]
    async fn test_children_kept_in_listing_order() {
        let source = FakeSource::new(Some("root")).with_folder(
            "root",
            vec![file("f2", "zebra.ifc"), file("f1", "alpha.ifc")],
        );

        let files = enumerate(&source, "proj").await.unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        // no sorting, remote order wins
        assert_eq!(paths, vec!["zebra.ifc", "alpha.ifc"]);
    }

    #[tokio::test]
    async fn test_lowercase_folder_tag_recursed() {
        let mut sub = folder("d1", "Sub");
        sub.item_type = Some("folder".to_string());
        let source = FakeSource::new(Some("root"))
            .with_folder("root", vec![sub])
            .with_folder("d1", vec![file("f1", "b.ifc")]);

        let files = enumerate(&source, "proj").await.unwrap();
        assert_eq!(files[0].path, "Sub/b.ifc");
    }

    #[tokio::test]
    async fn test_unknown_type_is_a_leaf() {
        let mut odd = file("f1", "link");
        odd.item_type = Some("SHORTCUT".to_string());
        let source = FakeSource::new(Some("root")).with_folder("root", vec![odd]);

        let files = enumerate(&source, "proj").await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "link");
    }

    #[tokio::test]
    async fn test_missing_root_fails_before_any_listing() {
        let source = FakeSource::new(None);
        let err = enumerate(&source, "proj").await.unwrap_err();
        assert!(matches!(err, EnumerateError::RootFolderNotFound(p) if p == "proj"));
    }

    #[tokio::test]
    async fn test_mid_walk_failure_returns_nothing() {
        let source = FakeSource::new(Some("root"))
            .with_folder("root", vec![file("f1", "a.ifc"), folder("d1", "Sub")])
            .with_broken_folder("d1");

        let err = enumerate(&source, "proj").await.unwrap_err();
        assert!(matches!(err, EnumerateError::Api(ApiError::HttpStatus(..))));
    }

    #[tokio::test]
    async fn test_empty_root_yields_empty_list() {
        let source = FakeSource::new(Some("root")).with_folder("root", vec![]);
        let files = enumerate(&source, "proj").await.unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_join_path_strips_leading_slash() {
        assert_eq!(join_path("", "a.ifc"), "a.ifc");
        assert_eq!(join_path("Sub", "b.ifc"), "Sub/b.ifc");
        // empty ancestor names collapse into leading slashes, all stripped
        assert_eq!(join_path("/", "c.ifc"), "c.ifc");
    }
}
