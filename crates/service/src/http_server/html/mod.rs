use axum::routing::get;
use axum::Router;
use http::header::{ACCEPT, ORIGIN};
use http::Method;
use tower_http::cors::{Any, CorsLayer};

mod index;
mod project;
mod viewer;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<()> {
    let cors_layer = CorsLayer::new()
        .allow_methods(vec![Method::GET])
        .allow_headers(vec![ACCEPT, ORIGIN])
        .allow_origin(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(index::handler))
        .route("/projects/:project_id", get(project::handler))
        .route("/projects/:project_id/viewer", get(viewer::handler))
        .route(
            "/projects/:project_id/viewer/download",
            get(viewer::download_handler),
        )
        .with_state(state)
        .layer(cors_layer)
}

/// One selectable entry on a picker page. A failed or empty listing renders
/// as a single non-link row carrying the message, so the page stays up with
/// the failure visible inline.
pub struct PickerRow {
    pub href: String,
    pub download_href: String,
    pub label: String,
    pub is_link: bool,
}

impl PickerRow {
    pub fn link(href: String, label: impl Into<String>) -> Self {
        Self {
            href,
            download_href: String::new(),
            label: label.into(),
            is_link: true,
        }
    }

    pub fn link_with_download(href: String, download_href: String, label: impl Into<String>) -> Self {
        Self {
            href,
            download_href,
            label: label.into(),
            is_link: true,
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            href: String::new(),
            download_href: String::new(),
            label: label.into(),
            is_link: false,
        }
    }
}
