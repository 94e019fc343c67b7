//! nuget-search CLI - search for packages on the NuGet registry.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nuget_search::{
    CollectorOptions, HttpBackend, RenderOptions, Renderer, ResultCollector,
    NUGET_SEARCH_ENDPOINT,
};

/// Search for NuGet packages
#[derive(Parser)]
#[command(name = "nuget-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The search string passed to the NuGet Search API
    query: String,

    /// Keep fetching results until all results are retrieved. This
    /// overrides the --max-results option.
    #[arg(short = 'a', long)]
    show_all: bool,

    /// Set the max number of results to be fetched
    #[arg(
        short = 'm',
        long,
        value_name = "N",
        default_value_t = 15,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_results: u64,

    /// Display additional information about every package resulting from
    /// the search
    #[arg(short, long)]
    verbose: bool,

    /// Display all available versions of packages
    #[arg(short = 's', long)]
    show_all_versions: bool,

    /// Search endpoint to query
    #[arg(long, value_name = "URL", default_value = NUGET_SEARCH_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr so stdout stays clean for results.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let backend = HttpBackend::with_endpoint(&cli.endpoint)?;
    let collector = ResultCollector::new(
        backend,
        CollectorOptions {
            max_results: cli.max_results as usize,
            show_all: cli.show_all,
        },
    );

    let results = collector.collect(&cli.query).await?;

    let renderer = Renderer::new(RenderOptions {
        verbose: cli.verbose,
        show_all_versions: cli.show_all_versions,
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.render(&results, &mut out)?;
    out.flush()?;

    Ok(())
}
