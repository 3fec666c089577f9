use clap::Args;

use connect::enumerate;

/// Diagnostic for the injected credential, mirroring a quick "is my token
/// wired up" check: token shape plus an optional end-to-end file listing.
#[derive(Args, Debug, Clone)]
pub struct Token {
    /// When set, also enumerate this project's files as an end-to-end check
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("no access token available; pass --token or set TCV_ACCESS_TOKEN")]
    MissingToken,
}

#[async_trait::async_trait]
impl crate::op::Op for Token {
    type Error = TokenError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let token = ctx.access_token.as_deref().ok_or(TokenError::MissingToken)?;

        let preview: String = token.chars().take(20).collect();
        let mut lines = vec![
            format!("Remote: {}", ctx.remote),
            "Token retrieved: success".to_string(),
            format!("Access token (first 20 chars): {}...", preview),
            format!("Token length: {} characters", token.len()),
        ];

        if let Some(project) = &self.project {
            lines.push(format!("Selected project: {}", project));
            // a listing failure is part of the diagnosis, not a fault
            match enumerate(&ctx.client, project).await {
                Ok(files) => {
                    lines.push(format!("Total files found: {}", files.len()));
                    for f in files.iter().take(5) {
                        lines.push(format!("  {}", f.path));
                    }
                    if files.len() > 5 {
                        lines.push(format!("  ... and {} more files", files.len() - 5));
                    }
                }
                Err(e) => lines.push(format!("File listing error: {}", e)),
            }
        }

        Ok(lines.join("\n"))
    }
}
