//! CLI entry point for the litcloud tool.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use litcloud_core::{EntrezClient, RunConfig, pipeline};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let config = RunConfig {
        output: args.output,
        ..RunConfig::default()
    };
    info!(
        topic = %config.topic,
        journals = config.journals.len(),
        window_days = config.window_days,
        "starting trend cloud run"
    );

    let client = EntrezClient::new(config.pacing);
    let summary = pipeline::run(&config, &client).await?;

    if summary.is_empty() {
        info!(path = %config.output.display(), "no data found, fallback page written");
    } else {
        info!(
            path = %config.output.display(),
            terms = summary.ranked_terms,
            identifiers = summary.identifiers,
            failed_batches = summary.failed_batches,
            "trend cloud written"
        );
    }

    Ok(())
}
