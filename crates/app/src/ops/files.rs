use clap::Args;

use connect::{enumerate, EnumerateError};

#[derive(Args, Debug, Clone)]
pub struct Files {
    /// Project to enumerate
    #[arg(long)]
    pub project: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    #[error("enumeration failed: {0}")]
    Enumerate(#[from] EnumerateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Files {
    type Error = FilesError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let files = enumerate(&ctx.client, &self.project).await?;

        if files.is_empty() {
            Ok("No files found in project".to_string())
        } else {
            let output = files
                .iter()
                .map(|f| {
                    let mut line = format!("{}  {}", f.id, f.path);
                    if let Some(size) = f.size {
                        line.push_str(&format!("  {} bytes", size));
                    }
                    if let Some(modified) = &f.modified_at {
                        line.push_str(&format!("  {}", modified));
                    }
                    line
                })
                .collect::<Vec<_>>()
                .join("\n");
            Ok(output)
        }
    }
}
