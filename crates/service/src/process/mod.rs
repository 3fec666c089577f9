use tokio::sync::watch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::http_server;
use crate::{ServiceConfig, ServiceState};

/// Run the web UI until ctrl-c.
pub async fn spawn_service(service_config: &ServiceConfig) -> Result<(), SpawnError> {
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let env_filter = EnvFilter::builder()
        .with_default_directive(service_config.log_level.into())
        .from_env_lossy();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stdout_layer).init();

    let state = ServiceState::from_config(service_config)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            let _ = shutdown_tx.send(());
        }
    });

    let http_config = http_server::Config {
        listen_addr: service_config.listen_addr,
        log_level: service_config.log_level,
    };
    http_server::run(http_config, state, shutdown_rx).await?;

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("state setup failed: {0}")]
    State(#[from] crate::state::StateSetupError),
    #[error("http server failed: {0}")]
    Http(#[from] http_server::HttpServerError),
}
