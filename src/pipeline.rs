//! End-to-end run orchestration.
//!
//! One run is a straight line: build the search expression, harvest terms,
//! rank them, scale them into display weights, and write the page. Every
//! recoverable API failure has already been swallowed by the time ranking
//! starts; the only way a run fails is being unable to write the report.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, instrument};

use crate::config::RunConfig;
use crate::harvest::EntrezClient;
use crate::query::SearchQuery;
use crate::report;
use crate::terms::{map_weights, rank_terms};

/// Headline numbers from one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Identifiers returned by the search.
    pub identifiers: usize,
    /// Metadata batches attempted.
    pub batches: usize,
    /// Batches dropped by the failure policy.
    pub failed_batches: usize,
    /// Terms surviving normalization across all successful batches.
    pub harvested_terms: usize,
    /// Distinct terms in the rendered cloud.
    pub ranked_terms: usize,
}

impl RunSummary {
    /// True when the run ended in the fallback document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked_terms == 0
    }
}

/// Runs the whole pipeline and writes the report.
///
/// The report file is produced in every case: runs that end with no
/// ranked terms, for whatever reason, write the fallback document in
/// place of the cloud.
///
/// # Errors
///
/// Fails only when the report cannot be rendered or written.
#[instrument(skip(config, client), fields(topic = %config.topic))]
pub async fn run(config: &RunConfig, client: &EntrezClient) -> Result<RunSummary> {
    let today = Local::now().date_naive();
    let query = SearchQuery::build(&config.topic, &config.journals, config.window_days, today);
    info!(expression = %query.expression, "search expression assembled");

    let harvest = client.harvest(&query.expression, config.max_results).await;
    let identifiers = harvest.identifiers.len();
    let batches = harvest.batches.len();
    let failed_batches = harvest.failed_batches();
    let terms = harvest.into_terms();

    let ranked = rank_terms(&terms, config.top_n);

    let document = if ranked.is_empty() {
        info!("no ranked terms, falling back to the empty document");
        report::render_empty()
    } else {
        let items = map_weights(&ranked, config.min_weight, config.max_weight, |term| {
            query.term_link(term)
        });
        report::render(&items, config, today)?
    };

    report::write(&config.output, &document)
        .with_context(|| format!("persisting report to {}", config.output.display()))?;

    let summary = RunSummary {
        identifiers,
        batches,
        failed_batches,
        harvested_terms: terms.len(),
        ranked_terms: ranked.len(),
    };
    info!(
        identifiers = summary.identifiers,
        batches = summary.batches,
        failed_batches = summary.failed_batches,
        harvested_terms = summary.harvested_terms,
        ranked_terms = summary.ranked_terms,
        "run complete"
    );
    Ok(summary)
}
