//! Backend abstraction for issuing one page of a search.

use async_trait::async_trait;

use crate::{Result, SearchQuery, SearchResponse};

/// Trait for fetching a single page of search results.
///
/// The production implementation talks HTTP to the registry; tests drive
/// the collector with scripted in-memory backends. All configuration
/// (endpoint, client settings) is fixed at construction time; `fetch_page`
/// is a simple query-in, page-out interface.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetches the page described by `query`.
    async fn fetch_page(&self, query: &SearchQuery) -> Result<SearchResponse>;
}
