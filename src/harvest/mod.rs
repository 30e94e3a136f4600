//! Identifier search and batched metadata harvesting.
//!
//! The harvest runs in two phases against the NCBI E-utilities API: an
//! esearch call that returns article identifiers for a search expression,
//! then one efetch call per batch of identifiers to pull the article
//! metadata the keywords live in. Failures never abort the run; they cost
//! data and are recorded in the [`HarvestReport`].

mod error;
mod xml;

pub use error::HarvestError;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::terms::{normalize_term, title_case};

/// Production E-utilities base URL.
const DEFAULT_EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Identifiers per metadata fetch. Batches this size keep each POST body
/// comfortably inside the API's guidance.
pub const BATCH_SIZE: usize = 100;

/// Client for the two E-utilities endpoints the harvest uses.
pub struct EntrezClient {
    client: Client,
    esearch_url: String,
    efetch_url: String,
    pacing: Duration,
}

impl EntrezClient {
    /// Creates a client against the production endpoints.
    ///
    /// `pacing` is slept between successive metadata batches to stay under
    /// the API's unauthenticated rate limit.
    #[must_use]
    pub fn new(pacing: Duration) -> Self {
        Self::with_base_url(DEFAULT_EUTILS_BASE_URL, pacing)
    }

    /// Creates a client against a custom endpoint base.
    ///
    /// Used by tests to point the harvest at a local mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, pacing: Duration) -> Self {
        let base_url = base_url.into();
        let base = base_url.trim_end_matches('/');
        Self {
            client: Client::new(),
            esearch_url: format!("{base}/esearch.fcgi"),
            efetch_url: format!("{base}/efetch.fcgi"),
            pacing,
        }
    }

    /// Searches for article identifiers matching `expression`, newest
    /// first, capped at `max_results`.
    ///
    /// A well-formed response without the expected envelope counts as zero
    /// identifiers; that is how the API answers queries with no hits.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError`] when the request fails, the endpoint
    /// answers with a non-success status, or the body is not JSON.
    #[instrument(skip(self, expression, max_results), fields(retmax = max_results))]
    pub async fn search_identifiers(
        &self,
        expression: &str,
        max_results: usize,
    ) -> Result<Vec<String>, HarvestError> {
        let retmax = max_results.to_string();
        let params = [
            ("db", "pubmed"),
            ("term", expression),
            ("retmode", "json"),
            ("retmax", retmax.as_str()),
            ("sort", "date"),
        ];

        let response = self
            .client
            .get(&self.esearch_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| HarvestError::transport(&self.esearch_url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::status(&self.esearch_url, status.as_u16()));
        }

        let envelope: SearchEnvelope = response.json().await.map_err(HarvestError::decode)?;

        let identifiers = envelope
            .esearchresult
            .map(|result| result.idlist)
            .unwrap_or_default();

        debug!(identifiers = identifiers.len(), "identifier search complete");
        Ok(identifiers)
    }

    /// Runs the identifier search and the batched metadata fetch loop.
    ///
    /// A search failure degrades to zero identifiers and a failed batch is
    /// recorded and skipped, so this never fails the run. Batches are
    /// fetched strictly one after another with the configured pacing
    /// between them.
    #[instrument(skip(self, expression))]
    pub async fn harvest(&self, expression: &str, max_results: usize) -> HarvestReport {
        let (identifiers, search_error) =
            match self.search_identifiers(expression, max_results).await {
                Ok(identifiers) => (identifiers, None),
                Err(error) => {
                    warn!(error = %error, "identifier search failed, continuing with no results");
                    (Vec::new(), Some(error))
                }
            };

        info!(identifiers = identifiers.len(), "starting metadata fetch");

        let batch_count = identifiers.len().div_ceil(BATCH_SIZE);
        let mut batches = Vec::with_capacity(batch_count);
        for (batch, chunk) in identifiers.chunks(BATCH_SIZE).enumerate() {
            match self.fetch_batch(chunk, batch).await {
                Ok(terms) => {
                    debug!(batch, terms = terms.len(), "batch harvested");
                    batches.push(BatchOutcome::Harvested(terms));
                }
                Err(error) => {
                    warn!(batch, error = %error, "batch dropped");
                    batches.push(BatchOutcome::Failed(error));
                }
            }
            if batch + 1 < batch_count && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        HarvestReport {
            identifiers,
            search_error,
            batches,
        }
    }

    /// Fetches one identifier batch and extracts its normalized terms.
    ///
    /// Per article, MeSH descriptors come first (as published), then
    /// author keywords (title-cased before normalization). Terms the
    /// normalizer discards or empties out are dropped here.
    async fn fetch_batch(
        &self,
        identifiers: &[String],
        batch: usize,
    ) -> Result<Vec<String>, HarvestError> {
        let ids = identifiers.join(",");
        let form = [("db", "pubmed"), ("id", ids.as_str()), ("retmode", "xml")];

        let response = self
            .client
            .post(&self.efetch_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| HarvestError::transport(&self.efetch_url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::status(&self.efetch_url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| HarvestError::transport(&self.efetch_url, e))?;

        let records =
            xml::parse_article_records(&body).map_err(|e| HarvestError::parse(batch, e))?;

        let mut terms = Vec::new();
        for record in records {
            for descriptor in record.descriptors {
                if let Some(term) = normalize_term(&descriptor).filter(|term| !term.is_empty()) {
                    terms.push(term);
                }
            }
            for keyword in record.keywords {
                if let Some(term) =
                    normalize_term(&title_case(&keyword)).filter(|term| !term.is_empty())
                {
                    terms.push(term);
                }
            }
        }
        Ok(terms)
    }
}

impl std::fmt::Debug for EntrezClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntrezClient")
            .field("esearch_url", &self.esearch_url)
            .field("efetch_url", &self.efetch_url)
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}

/// Search response envelope. Both levels are optional so that bodies
/// without hits, which omit the result object, degrade to zero
/// identifiers instead of a decode error.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    esearchresult: Option<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// Everything observed during one harvest.
#[derive(Debug)]
pub struct HarvestReport {
    /// Identifiers returned by the search, in API order.
    pub identifiers: Vec<String>,
    /// Search failure, when the identifier list degraded to empty.
    pub search_error: Option<HarvestError>,
    /// Outcome of every attempted batch, in batch order.
    pub batches: Vec<BatchOutcome>,
}

/// Result of fetching and extracting one identifier batch.
#[derive(Debug)]
pub enum BatchOutcome {
    /// Normalized terms the batch contributed, in article order.
    Harvested(Vec<String>),
    /// The batch contributed nothing; the reason is kept for diagnostics.
    Failed(HarvestError),
}

impl HarvestReport {
    /// Number of batches dropped by the failure policy.
    #[must_use]
    pub fn failed_batches(&self) -> usize {
        self.batches
            .iter()
            .filter(|outcome| matches!(outcome, BatchOutcome::Failed(_)))
            .count()
    }

    /// Flattens the successful batches into one term sequence, preserving
    /// batch order and per-article order within each batch.
    #[must_use]
    pub fn into_terms(self) -> Vec<String> {
        self.batches
            .into_iter()
            .filter_map(|outcome| match outcome {
                BatchOutcome::Harvested(terms) => Some(terms),
                BatchOutcome::Failed(_) => None,
            })
            .flatten()
            .collect()
    }
}
