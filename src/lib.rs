//! # nuget-search
//!
//! A search client library for the NuGet package registry, with a CLI.
//!
//! This library drives the registry's paginated search endpoint and
//! accumulates results across pages, with support for:
//!
//! - Sequential paginated fetching up to a result cap or the full hit count
//! - Tolerant wire parsing (missing fields fall back to defaults)
//! - Pluggable backends for testing
//! - Text rendering with optional per-package and per-version detail
//!
//! ## Example
//!
//! ```rust,no_run
//! use nuget_search::{CollectorOptions, HttpBackend, ResultCollector};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let collector = ResultCollector::new(HttpBackend::new(), CollectorOptions::default());
//!     let results = collector.collect("Newtonsoft.Json").await?;
//!
//!     for package in results.packages() {
//!         println!("{}", package.id);
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
mod backend_http;
mod collector;
mod error;
mod package;
mod query;
mod render;

pub use backend::SearchBackend;
pub use backend_http::{HttpBackend, NUGET_SEARCH_ENDPOINT};
pub use collector::{CollectedResults, CollectorOptions, ResultCollector};
pub use error::{Result, SearchError};
pub use package::{PackageRecord, PackageVersion, SearchResponse};
pub use query::{SearchQuery, DEFAULT_TAKE, MAX_TAKE};
pub use render::{RenderOptions, Renderer};
