use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

use super::error::ApiError;
use super::ApiRequest;

/// Client for the Trimble Connect REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL of the remote, e.g. `https://app.connect.trimble.com`
    pub remote: Url,
    /// Bearer credential added to authenticated requests
    bearer_token: Option<String>,
    /// The reqwest client
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            remote: remote.clone(),
            bearer_token: None,
            client,
        })
    }

    /// Set the bearer credential used for authenticated requests.
    ///
    /// The token is assumed valid for the lifetime of the client; refresh is
    /// the caller's concern.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn has_credential(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Call a method that implements ApiRequest on the remote.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        // Determine if this request requires authentication
        let add_authentication = request.requires_authentication();
        let mut request_builder = request.build_request(&self.remote, &self.client);

        if add_authentication {
            let bearer_token = self.bearer_token.as_ref().ok_or(ApiError::AuthRequired)?;
            request_builder = request_builder.bearer_auth(bearer_token);
        }

        // Send the request and obtain the response
        let response = request_builder.send().await?;

        // If the call succeeded
        if response.status().is_success() {
            // Interpret the response as a JSON object
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }
}
