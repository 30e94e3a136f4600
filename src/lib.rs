//! Literature Trend Cloud Library
//!
//! This library provides the core functionality for the litcloud tool,
//! which harvests recent article metadata from PubMed, ranks the topical
//! keywords of a clinical specialty, and renders them as a clickable
//! word cloud on a static HTML page.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Run configuration and built-in defaults
//! - [`query`] - PubMed search expression assembly
//! - [`harvest`] - Identifier search and batched metadata fetching
//! - [`terms`] - Keyword normalization, ranking, and display weighting
//! - [`report`] - Static HTML report emission
//! - [`pipeline`] - End-to-end run orchestration

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod harvest;
pub mod pipeline;
pub mod query;
pub mod report;
pub mod terms;

// Re-export commonly used types
pub use config::{RunConfig, TOP_JOURNALS};
pub use harvest::{BATCH_SIZE, BatchOutcome, EntrezClient, HarvestError, HarvestReport};
pub use pipeline::{RunSummary, run};
pub use query::SearchQuery;
pub use terms::{
    DisplayItem, FrequencyEntry, map_weights, normalize_term, rank_terms, title_case,
};
