use std::net::SocketAddr;

use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web UI listens on
    pub listen_addr: SocketAddr,

    /// Trimble Connect remote the UI reads from
    pub remote: Url,

    /// Bearer credential for the remote. Assumed valid for the lifetime of
    /// the service; also embedded into emitted viewer documents.
    pub access_token: String,

    /// log level for http tracing
    pub log_level: tracing::Level,
}
