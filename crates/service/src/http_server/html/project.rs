use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::{Path, State};
use tracing::instrument;

use connect::{enumerate, EnumerateError, FileRecord};

use super::PickerRow;
use crate::ServiceState;

#[derive(Template)]
#[template(path = "project.html")]
pub struct ProjectTemplate {
    pub project_id: String,
    pub rows: Vec<PickerRow>,
}

#[instrument(skip(state))]
pub async fn handler(
    State(state): State<ServiceState>,
    Path(project_id): Path<String>,
) -> askama_axum::Response {
    let result = enumerate(state.client(), &project_id).await;
    let template = ProjectTemplate {
        rows: file_rows(&project_id, result),
        project_id,
    };
    template.into_response()
}

fn file_rows(project_id: &str, result: Result<Vec<FileRecord>, EnumerateError>) -> Vec<PickerRow> {
    match result {
        Ok(files) if files.is_empty() => vec![PickerRow::placeholder("No files found in project")],
        Ok(files) => files
            .into_iter()
            .map(|f| {
                PickerRow::link_with_download(
                    format!("/projects/{}/viewer?model={}", project_id, f.id),
                    format!("/projects/{}/viewer/download?model={}", project_id, f.id),
                    f.path,
                )
            })
            .collect(),
        Err(e) => vec![PickerRow::placeholder(format!("Error loading files: {}", e))],
    }
}
