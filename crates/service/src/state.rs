use connect::ApiClient;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct State {
    client: ApiClient,
    access_token: String,
}

impl State {
    pub fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        let client =
            ApiClient::new(&config.remote)?.with_bearer_token(config.access_token.as_str());
        Ok(Self {
            client,
            access_token: config.access_token.clone(),
        })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The raw credential, for embedding into viewer documents.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("failed to set up API client: {0}")]
    Api(#[from] connect::ApiError),
}
