//! Integration tests against the live NuGet search endpoint.
//!
//! These tests are marked with `#[ignore]` by default because they require
//! network access and may be slow or flaky.
//!
//! Run with: `cargo test --test integration -- --ignored`

use nuget_search::{
    CollectedResults, CollectorOptions, HttpBackend, RenderOptions, Renderer, ResultCollector,
};

/// Helper to run a collection against the production endpoint.
async fn collect(query: &str, options: CollectorOptions) -> CollectedResults {
    let collector = ResultCollector::new(HttpBackend::new(), options);
    let results = collector
        .collect(query)
        .await
        .expect("live search should succeed");
    println!(
        "Query '{}' matched {} total hits, collected {}",
        query,
        results.total_hits,
        results.len()
    );
    results
}

#[tokio::test]
#[ignore]
async fn test_live_search_default_cap() {
    let results = collect("Newtonsoft.Json", CollectorOptions::default()).await;
    assert!(!results.is_empty(), "query should return results");
    assert!(results.len() <= 15);
    assert!(results.total_hits >= results.len() as u64);
}

#[tokio::test]
#[ignore]
async fn test_live_search_small_cap_paginates() {
    let results = collect(
        "json",
        CollectorOptions {
            max_results: 3,
            show_all: false,
        },
    )
    .await;
    assert_eq!(results.target_count, 3);
    assert!(results.len() >= 3);
}

#[tokio::test]
#[ignore]
async fn test_live_search_obscure_query_renders() {
    let results = collect(
        "zzqqxy-no-such-package-expected",
        CollectorOptions::default(),
    )
    .await;

    let renderer = Renderer::new(RenderOptions {
        verbose: true,
        show_all_versions: true,
    });
    let output = renderer.render_to_string(&results);
    assert!(output.contains("Total of"));
}

#[tokio::test]
#[ignore]
async fn test_live_search_records_have_ids() {
    let results = collect("serilog", CollectorOptions::default()).await;
    for package in results.packages() {
        assert!(!package.id.is_empty());
    }
}
