use std::fs;
use std::path::PathBuf;

use clap::Args;

use connect::build_viewer_html;

pub const DEFAULT_OUTPUT: &str = "trimble_connect_viewer.html";

#[derive(Args, Debug, Clone)]
pub struct Viewer {
    /// Project containing the model
    #[arg(long)]
    pub project: String,

    /// File/model id to open
    #[arg(long)]
    pub model: String,

    /// Optional model version id
    #[arg(long)]
    pub version: Option<String>,

    /// Output path; `-` writes the document to stdout
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("no access token available; pass --token or set TCV_ACCESS_TOKEN")]
    MissingToken,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait::async_trait]
impl crate::op::Op for Viewer {
    type Error = ViewerError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let token = ctx
            .access_token
            .as_deref()
            .ok_or(ViewerError::MissingToken)?;

        let html = build_viewer_html(token, &self.project, &self.model, self.version.as_deref());

        if self.output.as_os_str() == "-" {
            Ok(html)
        } else {
            fs::write(&self.output, &html)?;
            Ok(format!("Wrote viewer document to {}", self.output.display()))
        }
    }
}
