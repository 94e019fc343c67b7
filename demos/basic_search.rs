//! Example: Search the NuGet registry and print verbose package details.

use std::io;

use nuget_search::{CollectorOptions, HttpBackend, RenderOptions, Renderer, ResultCollector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let collector = ResultCollector::new(
        HttpBackend::new(),
        CollectorOptions {
            max_results: 5,
            show_all: false,
        },
    );

    let results = collector.collect("Newtonsoft.Json").await?;

    println!(
        "Collected {} of {} matching packages",
        results.len(),
        results.total_hits
    );
    println!();

    let renderer = Renderer::new(RenderOptions {
        verbose: true,
        show_all_versions: false,
    });
    renderer.render(&results, &mut io::stdout().lock())?;

    Ok(())
}
