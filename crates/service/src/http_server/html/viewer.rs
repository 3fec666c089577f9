use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use http::{header, StatusCode};
use serde::Deserialize;
use tracing::instrument;

use connect::build_viewer_html;

use crate::ServiceState;

pub const DOWNLOAD_FILE_NAME: &str = "trimble_connect_viewer.html";

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub model: Option<String>,
    pub version: Option<String>,
}

/// Serve the viewer document inline (the embedded web view).
#[instrument(skip(state))]
pub async fn handler(
    State(state): State<ServiceState>,
    Path(project_id): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Response {
    let Some(model) = query.model else {
        return user_error("Please select a file/model to visualize");
    };

    let html = build_viewer_html(
        state.access_token(),
        &project_id,
        &model,
        query.version.as_deref(),
    );
    Html(html).into_response()
}

/// Serve the same document as a download attachment.
#[instrument(skip(state))]
pub async fn download_handler(
    State(state): State<ServiceState>,
    Path(project_id): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Response {
    let Some(model) = query.model else {
        return user_error("Please select a file/model to download the viewer for");
    };

    let html = build_viewer_html(
        state.access_token(),
        &project_id,
        &model,
        query.version.as_deref(),
    );

    (
        [
            (
                header::CONTENT_TYPE.as_str(),
                "text/html; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION.as_str(),
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ),
        ],
        html,
    )
        .into_response()
}

/// A missing selection is the user's to fix, not a server fault.
fn user_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Html(format!("<h2>{}</h2>", message)),
    )
        .into_response()
}
