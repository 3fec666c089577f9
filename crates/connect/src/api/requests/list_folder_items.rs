use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::types::FolderItem;
use crate::API_PREFIX;

/// List the immediate children of a folder, in remote listing order.
///
/// The response is treated as the complete item set; the listing endpoint is
/// not paged here. See DESIGN.md for the pagination caveat.
#[derive(Debug, Clone)]
pub struct ListFolderItems {
    pub folder_id: String,
}

impl ApiRequest for ListFolderItems {
    type Response = Vec<FolderItem>;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("{}/folders/{}/items", API_PREFIX, self.folder_id))
            .expect("valid folder items url");
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
        let req = ListFolderItems {
            folder_id: "root-1".to_string(),
        }
        .build_request(&base, &client)
        .build()
        .unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://app.connect.trimble.com/tc/api/2.0/folders/root-1/items"
        );
    }
}
