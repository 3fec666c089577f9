use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

mod client;
mod error;
pub mod requests;

pub use client::ApiClient;
pub use error::ApiError;

/// Definition of an API request against the Trimble Connect remote.
pub trait ApiRequest {
    /// Has a response type
    type Response: DeserializeOwned;

    /// Builds a reqwest request
    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
    /// Optionally requires authentication
    fn requires_authentication(&self) -> bool;
}
