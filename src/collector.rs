//! Paginated result collection.

use tracing::{debug, warn};

use crate::query::MAX_TAKE;
use crate::{PackageRecord, Result, SearchBackend, SearchError, SearchQuery};

/// Options controlling how many results a run collects.
#[derive(Debug, Clone, Copy)]
pub struct CollectorOptions {
    /// Cap on displayed results. Must be positive.
    pub max_results: usize,
    /// Fetch every result the server reports, ignoring `max_results`.
    pub show_all: bool,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            max_results: crate::query::DEFAULT_TAKE,
            show_all: false,
        }
    }
}

/// Everything accumulated over one collection run.
#[derive(Debug, Clone, Default)]
pub struct CollectedResults {
    packages: Vec<PackageRecord>,
    /// Total number of matches reported by the server.
    pub total_hits: u64,
    /// Number of results the run set out to display, fixed after the
    /// first response: `total_hits` when showing all, otherwise
    /// `min(total_hits, max_results)`.
    pub target_count: usize,
}

impl CollectedResults {
    /// Appends a record, preserving fetch order.
    pub fn push(&mut self, package: PackageRecord) {
        self.packages.push(package);
    }

    /// Returns the collected records in fetch order.
    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    /// Returns the number of records actually collected.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Collects search results by repeated paginated fetches.
///
/// One page is requested at a time, each awaited to completion before the
/// next is issued. Any backend error aborts the run immediately; there are
/// no retries.
pub struct ResultCollector<B> {
    backend: B,
    options: CollectorOptions,
}

impl<B: SearchBackend> ResultCollector<B> {
    /// Creates a collector over the given backend.
    pub fn new(backend: B, options: CollectorOptions) -> Self {
        Self { backend, options }
    }

    /// Fetches pages for `query` until the resolved target count is reached.
    ///
    /// The target is resolved exactly once, from the first response:
    /// `total_hits` when `show_all` is set, `min(total_hits, max_results)`
    /// otherwise. The server may return a superset of the target through
    /// its own page granularity; no client-side truncation is applied.
    pub async fn collect(&self, query: &str) -> Result<CollectedResults> {
        if self.options.max_results == 0 {
            return Err(SearchError::InvalidQuery(
                "max results must be positive".into(),
            ));
        }

        let take = MAX_TAKE.min(self.options.max_results);
        let mut skip = 0usize;
        let mut target: Option<usize> = None;
        let mut results = CollectedResults::default();

        loop {
            let page_query = SearchQuery::new(query).with_take(take).with_skip(skip);
            let page = self.backend.fetch_page(&page_query).await?;

            let target_count = match target {
                Some(count) => count,
                None => {
                    results.total_hits = page.total_hits;
                    let count = if self.options.show_all {
                        page.total_hits as usize
                    } else {
                        (page.total_hits as usize).min(self.options.max_results)
                    };
                    debug!(
                        total_hits = page.total_hits,
                        target_count = count,
                        "resolved collection target"
                    );
                    target = Some(count);
                    count
                }
            };

            let fetched = page.data.len();
            skip += fetched;
            results.packages.extend(page.data);

            if skip >= target_count {
                break;
            }
            if fetched == 0 {
                // A conforming server keeps paging until totalHits; an empty
                // page short of the target would otherwise loop forever.
                warn!(
                    collected = skip,
                    target_count, "server returned an empty page before the target, stopping"
                );
                break;
            }
        }

        results.target_count = target.unwrap_or(0);
        Ok(results)
    }
}
