//! Catalog API client.

use medshelf_model::{Medicine, Suggestion};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{ApiError, Result};
use crate::response::{CatalogResponse, SearchResponse};

/// Production base URL of the pharmacy catalog backend.
pub const DEFAULT_BASE_URL: &str = "https://dev.entrolabs.com/snomed/pharmapold";

/// User agent string for catalog requests.
const USER_AGENT_VALUE: &str = concat!("medshelf/", env!("CARGO_PKG_VERSION"));

/// Client for the catalog and autocomplete read endpoints.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client against the given base URL.
    ///
    /// A trailing slash on `base_url` is tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Fetches page one of the audit medicine catalog.
    ///
    /// The page number and SKU filters are fixed; the application never
    /// requests anything else. A response without a `results` field yields
    /// an empty list.
    pub async fn fetch_catalog(&self) -> Result<Vec<Medicine>> {
        tracing::debug!("Fetching medicine catalog from {}/audit/", self.base_url);

        let response = self.catalog_request().send().await?;

        let body: CatalogResponse = decode(response).await?;
        tracing::debug!("Catalog returned {} medicines", body.results.len());
        Ok(body.results)
    }

    /// Searches SKUs by name for autocomplete.
    ///
    /// `query` is sent verbatim as the `q` parameter. A response without a
    /// `sku` field yields an empty list.
    pub async fn search_medicines(&self, query: &str) -> Result<Vec<Suggestion>> {
        tracing::debug!("Searching SKUs for {:?}", query);

        let response = self.search_request(query).send().await?;

        let body: SearchResponse = decode(response).await?;
        tracing::debug!("Search returned {} suggestions", body.sku.len());
        Ok(body.sku)
    }

    /// The catalog GET with its fixed page-one query parameters.
    fn catalog_request(&self) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/audit/", self.base_url))
            .query(&[
                ("getAuditMedicines", "true"),
                ("page", "1"),
                ("sku_type", ""),
                ("sku_name", ""),
            ])
    }

    /// The autocomplete GET with the search term as `q`.
    fn search_request(&self, query: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/new/search.php", self.base_url))
            .query(&[("q", query)])
    }
}

/// Checks the status code and decodes the JSON body.
async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = CatalogClient::new("https://example.test/pharmapold/").unwrap();
        assert_eq!(client.base_url, "https://example.test/pharmapold");
    }

    #[test]
    fn production_base_url_is_accepted() {
        let client = CatalogClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn catalog_request_carries_fixed_query() {
        let client = CatalogClient::new("https://example.test").unwrap();
        let request = client.catalog_request().build().unwrap();

        assert_eq!(request.url().path(), "/audit/");
        assert_eq!(
            request.url().query(),
            Some("getAuditMedicines=true&page=1&sku_type=&sku_name=")
        );
    }

    #[test]
    fn search_request_encodes_the_term() {
        let client = CatalogClient::new("https://example.test").unwrap();
        let request = client.search_request("dolo 650").build().unwrap();

        assert_eq!(request.url().path(), "/new/search.php");
        assert_eq!(request.url().query(), Some("q=dolo+650"));
    }
}
