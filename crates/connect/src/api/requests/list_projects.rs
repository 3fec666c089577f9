use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::types::Project;
use crate::API_PREFIX;

/// Fetch every project visible to the credential.
#[derive(Debug, Clone, Default)]
pub struct ListProjects;

impl ApiRequest for ListProjects {
    type Response = Vec<Project>;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("{}/projects", API_PREFIX))
            .expect("valid projects url");
        client.get(full_url)
    }

    fn requires_authentication(&self) -> bool {
        true
    }
}
