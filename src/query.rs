//! Search query representation.

use serde::{Deserialize, Serialize};

/// Default number of results fetched and displayed.
pub const DEFAULT_TAKE: usize = 15;

/// Largest page size the search API accepts.
pub const MAX_TAKE: usize = 1000;

/// One page worth of search parameters, serialized directly as URL
/// query parameters (`q`, `take`, `skip`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The free-text search terms.
    #[serde(rename = "q")]
    pub query: String,
    /// Page size, clamped to 1..=1000.
    pub take: usize,
    /// Offset of the first record to return.
    pub skip: usize,
}

impl SearchQuery {
    /// Creates a new search query with the given terms and default paging.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            take: DEFAULT_TAKE,
            skip: 0,
        }
    }

    /// Sets the page size, clamped to the API's accepted range.
    pub fn with_take(mut self, take: usize) -> Self {
        self.take = take.clamp(1, MAX_TAKE);
        self
    }

    /// Sets the record offset.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("Newtonsoft.Json");
        assert_eq!(query.query, "Newtonsoft.Json");
        assert_eq!(query.take, DEFAULT_TAKE);
        assert_eq!(query.skip, 0);
    }

    #[test]
    fn test_search_query_with_take() {
        let query = SearchQuery::new("test").with_take(100);
        assert_eq!(query.take, 100);
    }

    #[test]
    fn test_search_query_with_take_clamps_high() {
        let query = SearchQuery::new("test").with_take(5000);
        assert_eq!(query.take, MAX_TAKE);
    }

    #[test]
    fn test_search_query_with_take_clamps_low() {
        let query = SearchQuery::new("test").with_take(0);
        assert_eq!(query.take, 1);
    }

    #[test]
    fn test_search_query_with_skip() {
        let query = SearchQuery::new("test").with_skip(30);
        assert_eq!(query.skip, 30);
    }

    #[test]
    fn test_search_query_builder_chain() {
        let query = SearchQuery::new("serilog").with_take(50).with_skip(200);
        assert_eq!(query.query, "serilog");
        assert_eq!(query.take, 50);
        assert_eq!(query.skip, 200);
    }

    #[test]
    fn test_search_query_serializes_as_url_params() {
        let query = SearchQuery::new("json").with_take(15).with_skip(30);
        let encoded = serde_json::to_string(&query).unwrap();
        assert!(encoded.contains("\"q\":\"json\""));
        assert!(encoded.contains("\"take\":15"));
        assert!(encoded.contains("\"skip\":30"));
    }
}
