use clap::Args;
use url::Url;

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Remote base URL (default: the Trimble Connect US region)
    #[arg(long)]
    pub remote: Option<Url>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut config = AppConfig::default();
        if let Some(remote) = &self.remote {
            config.remote = remote.clone();
        }

        let state = AppState::init(config)?;

        let output = format!(
            "Initialized tcv directory at: {}\n\
             - Config: {}\n\
             - Remote: {}",
            state.tcv_dir.display(),
            state.config_path.display(),
            state.config.remote,
        );

        Ok(output)
    }
}
