//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Harvest recent journal keywords and render them as a clickable trend cloud.
///
/// litcloud queries PubMed for last month's articles in the configured
/// specialty journals, ranks their indexing keywords, and writes a static
/// word-cloud page where every word links back to its articles.
#[derive(Parser, Debug)]
#[command(name = "litcloud")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path the report page is written to
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,
}
