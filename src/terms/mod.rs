//! Keyword term processing.
//!
//! This module turns raw indexing vocabulary pulled from article metadata
//! into the ranked, weighted items the cloud renders: normalization drops
//! boilerplate and repairs inverted MeSH phrasing, the ranker aggregates
//! frequencies, and the weight mapper scales counts into font sizes.

mod normalizer;
mod ranker;
mod weights;

pub use normalizer::{normalize_term, title_case};
pub use ranker::{FrequencyEntry, rank_terms};
pub use weights::{DisplayItem, map_weights};
