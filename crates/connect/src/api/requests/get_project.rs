use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::types::Project;
use crate::API_PREFIX;

/// Fetch one project's metadata, including its root folder id.
#[derive(Debug, Clone)]
pub struct GetProject {
    pub project_id: String,
}

impl ApiRequest for GetProject {
    type Response = Project;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("{}/projects/{}", API_PREFIX, self.project_id))
            .expect("valid project url");
        client.get(full_url)
    }

    fn requires_authentication(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_request_url() {
        let base = Url::parse("https://app.connect.trimble.com").unwrap();
        let client = Client::new();
        let req = GetProject {
            project_id: "GUiM8Tk3nTo".to_string(),
        }
        .build_request(&base, &client)
        .build()
        .unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://app.connect.trimble.com/tc/api/2.0/projects/GUiM8Tk3nTo"
        );
    }
}
