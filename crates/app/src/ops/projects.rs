use clap::Args;

use connect::api::requests::ListProjects;
use connect::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Projects;

#[derive(Debug, thiserror::Error)]
pub enum ProjectsError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::op::Op for Projects {
    type Error = ProjectsError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let projects = ctx.client.call(ListProjects).await?;

        if projects.is_empty() {
            Ok("No projects found".to_string())
        } else {
            let output = projects
                .iter()
                .map(|p| format!("{}  {}", p.id, p.name))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(output)
        }
    }
}
