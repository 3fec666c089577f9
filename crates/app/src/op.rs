use std::error::Error;

use url::Url;

use connect::{ApiClient, ApiError};

use crate::args::Args;
use crate::state::AppState;

/// Environment variable consulted for the bearer credential when no --token
/// flag is given.
pub const TOKEN_ENV: &str = "TCV_ACCESS_TOKEN";

#[derive(Clone)]
pub struct OpContext {
    /// API client, carrying the resolved credential when one is available
    pub client: ApiClient,
    /// The resolved bearer credential. Ops that embed it into emitted
    /// documents read it from here.
    pub access_token: Option<String>,
    /// Remote base URL the client points at
    pub remote: Url,
}

impl OpContext {
    /// Resolve remote and credential from flags, environment and the stored
    /// config; flag beats environment beats config. A missing credential is
    /// not an error here, ops fail when they actually need one.
    pub fn from_args(args: &Args) -> Result<Self, ApiError> {
        let config = AppState::load().ok().map(|s| s.config);

        let remote = args
            .remote
            .clone()
            .or_else(|| config.as_ref().map(|c| c.remote.clone()))
            .unwrap_or_else(default_remote);

        let access_token = args
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .or_else(|| config.and_then(|c| c.access_token));

        let mut client = ApiClient::new(&remote)?;
        if let Some(token) = &access_token {
            client = client.with_bearer_token(token.as_str());
        }

        Ok(Self {
            client,
            access_token,
            remote,
        })
    }
}

fn default_remote() -> Url {
    Url::parse(connect::DEFAULT_REMOTE).expect("valid default remote")
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
