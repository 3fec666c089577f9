use serde::{Deserialize, Serialize};

/// A top-level container in Trimble Connect, holding a folder/file tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,

    /// Identifier of the project's root folder.
    #[serde(rename = "rootId", skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,

    /// Remaining project metadata, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry returned when listing a folder's contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderItem {
    pub id: String,
    #[serde(default)]
    pub name: String,

    /// Primary type tag, `"FOLDER"` for folders. Casing varies by endpoint.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// Secondary type tag some endpoints populate instead of `type`.
    #[serde(rename = "entityType", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// The API populates one of `modifiedAt`/`modifiedOn`, never both.
    #[serde(rename = "modifiedAt", skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(rename = "modifiedOn", skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,

    /// Any other fields the listing returned, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FolderItem {
    fn type_tag(&self) -> Option<&str> {
        self.item_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.entity_type.as_deref().filter(|t| !t.is_empty()))
    }

    /// Case-insensitive comparison of the type tag against the literal
    /// `FOLDER`. Anything else, including a missing tag, is a file-like leaf.
    /// A permissive heuristic rather than an API contract.
    pub fn is_folder(&self) -> bool {
        self.type_tag()
            .map(|t| t.eq_ignore_ascii_case("FOLDER"))
            .unwrap_or(false)
    }

    /// Whichever of the two modification timestamps is present.
    pub fn modified(&self) -> Option<&str> {
        self.modified_at.as_deref().or(self.modified_on.as_deref())
    }
}

/// Normalized output unit of the project tree enumeration.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,

    /// Slash-joined ancestor folder names plus the item's own name, with no
    /// leading slash.
    pub path: String,

    pub size: Option<u64>,
    pub modified_at: Option<String>,

    /// The unmodified source item, for downstream inspection.
    pub raw: FolderItem,
}
