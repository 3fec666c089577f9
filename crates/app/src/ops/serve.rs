use clap::Args;

use service::{spawn_service, ServiceConfig};

#[derive(Args, Debug, Clone)]
pub struct Serve {
    /// Listen address for the web UI
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub listen: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("invalid listen address: {0}")]
    ListenAddr(#[from] std::net::AddrParseError),

    #[error("no access token available; pass --token or set TCV_ACCESS_TOKEN")]
    MissingToken,

    #[error("service failed: {0}")]
    Failed(#[from] service::SpawnError),
}

#[async_trait::async_trait]
impl crate::op::Op for Serve {
    type Error = ServeError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let access_token = ctx.access_token.clone().ok_or(ServeError::MissingToken)?;

        let config = ServiceConfig {
            listen_addr: self.listen.parse()?,
            remote: ctx.remote.clone(),
            access_token,
            log_level: tracing::Level::INFO,
        };

        spawn_service(&config).await?;
        Ok("service ended".to_string())
    }
}
