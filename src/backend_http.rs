//! HTTP search backend using reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::backend::SearchBackend;
use crate::{Result, SearchError, SearchQuery, SearchResponse};

/// Production search endpoint of the NuGet registry.
pub const NUGET_SEARCH_ENDPOINT: &str = "https://azuresearch-ussc.nuget.org/query";

/// A search backend that issues plain HTTP GET requests via reqwest.
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Creates a backend pointed at the production NuGet search endpoint.
    pub fn new() -> Self {
        Self {
            client: default_client(),
            endpoint: Url::parse(NUGET_SEARCH_ENDPOINT).expect("endpoint constant must parse"),
        }
    }

    /// Creates a backend pointed at a custom endpoint URL.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Ok(Self {
            client: default_client(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Replaces the reqwest client, keeping the endpoint.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the endpoint this backend queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn default_client() -> Client {
    Client::builder()
        .user_agent(concat!("nuget-search/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn fetch_page(&self, query: &SearchQuery) -> Result<SearchResponse> {
        debug!(
            q = %query.query,
            take = query.take,
            skip = query.skip,
            "requesting search page"
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SearchError::Status(status));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_backend_new() {
        let backend = HttpBackend::new();
        assert_eq!(backend.endpoint().as_str(), NUGET_SEARCH_ENDPOINT);
    }

    #[test]
    fn test_http_backend_default() {
        let backend = HttpBackend::default();
        assert_eq!(backend.endpoint().as_str(), NUGET_SEARCH_ENDPOINT);
    }

    #[test]
    fn test_http_backend_with_endpoint() {
        let backend = HttpBackend::with_endpoint("http://127.0.0.1:8080/query").unwrap();
        assert_eq!(backend.endpoint().as_str(), "http://127.0.0.1:8080/query");
    }

    #[test]
    fn test_http_backend_with_invalid_endpoint() {
        let result = HttpBackend::with_endpoint("not a url");
        assert!(matches!(result, Err(SearchError::UrlParse(_))));
    }

    #[test]
    fn test_http_backend_with_client() {
        let client = Client::builder()
            .user_agent("test-agent")
            .build()
            .unwrap();
        let backend = HttpBackend::new().with_client(client);
        assert_eq!(backend.endpoint().as_str(), NUGET_SEARCH_ENDPOINT);
    }
}
