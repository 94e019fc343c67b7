//! Text rendering of collected results.

use std::io::{self, Write};

use crate::CollectedResults;

/// Flags controlling per-record detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print type, owners, downloads, URL and verified flag per package.
    pub verbose: bool,
    /// Print every published version with its download count.
    pub show_all_versions: bool,
}

/// Renders collected results as human-readable text.
///
/// One block per record: the id line always, detail lines per the options,
/// and a trailing blank line only when a detail flag produced output. The
/// final summary reports the server's total hit count and the resolved
/// target count.
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Writes all record blocks and the summary line to `out`.
    pub fn render<W: Write>(&self, results: &CollectedResults, out: &mut W) -> io::Result<()> {
        for package in results.packages() {
            writeln!(out, "> {}", package.id)?;

            let mut indent = 0;
            if self.options.verbose {
                indent += 2;
                writeln!(
                    out,
                    "{:indent$}{:<10} {}",
                    "", "Type:", package.package_type
                )?;
                writeln!(
                    out,
                    "{:indent$}{:<10} {}",
                    "",
                    "Owners:",
                    package.owners.join(", ")
                )?;
                writeln!(
                    out,
                    "{:indent$}{:<10} {}",
                    "", "Downloads:", package.total_downloads
                )?;
                writeln!(out, "{:indent$}{:<10} {}", "", "URL:", package.project_url)?;
                writeln!(out, "{:indent$}{:<10} {}", "", "Verified:", package.verified)?;
            }

            if self.options.show_all_versions {
                indent += 2;
                for version in &package.versions {
                    writeln!(
                        out,
                        "{:indent$}+ {:<16} Downloads: {}",
                        "", version.version, version.downloads
                    )?;
                }
            }

            if indent > 0 {
                writeln!(out)?;
            }
        }

        writeln!(
            out,
            "\nTotal of {} results, {} displayed...",
            results.total_hits, results.target_count
        )?;
        Ok(())
    }

    /// Renders into a string, for callers that do not hold a writer.
    pub fn render_to_string(&self, results: &CollectedResults) -> String {
        let mut buf = Vec::new();
        self.render(results, &mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("rendered output is UTF-8")
    }
}
