use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::State;
use tracing::instrument;

use connect::api::requests::ListProjects;
use connect::{ApiError, Project};

use super::PickerRow;
use crate::ServiceState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub rows: Vec<PickerRow>,
}

#[instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> askama_axum::Response {
    let result = state.client().call(ListProjects).await;
    let template = IndexTemplate {
        rows: project_rows(result),
    };
    template.into_response()
}

fn project_rows(result: Result<Vec<Project>, ApiError>) -> Vec<PickerRow> {
    match result {
        Ok(projects) if projects.is_empty() => vec![PickerRow::placeholder("No projects found")],
        Ok(projects) => projects
            .into_iter()
            .map(|p| PickerRow::link(format!("/projects/{}", p.id), p.name))
            .collect(),
        Err(e) => vec![PickerRow::placeholder(format!(
            "Error loading projects: {}",
            e
        ))],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            root_id: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_projects_become_links() {
        let rows = project_rows(Ok(vec![project("p1", "Bridge"), project("p2", "Tower")]));
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_link);
        assert_eq!(rows[0].href, "/projects/p1");
        assert_eq!(rows[1].label, "Tower");
    }

    #[test]
    fn test_empty_listing_is_a_placeholder() {
        let rows = project_rows(Ok(vec![]));
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].is_link);
        assert_eq!(rows[0].label, "No projects found");
    }

    #[test]
    fn test_failure_renders_as_single_error_row() {
        let rows = project_rows(Err(ApiError::AuthRequired));
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].is_link);
        assert!(rows[0].label.starts_with("Error loading projects:"));
    }
}
