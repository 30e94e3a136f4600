//! Run configuration and built-in defaults.
//!
//! A run is fully described by one [`RunConfig`] value fixed before the
//! pipeline starts. The defaults mirror the published rheumatology cloud;
//! other specialties swap the topic, journal list, and stop list.

use std::path::PathBuf;
use std::time::Duration;

/// Official NLM abbreviations of the thirty highest-profile venues for the
/// default specialty, in priority order.
pub const TOP_JOURNALS: [&str; 30] = [
    "Nat Rev Rheumatol",
    "Ann Rheum Dis",
    "Lancet Rheumatol",
    "Arthritis Rheumatol",
    "N Engl J Med",
    "Lancet",
    "JAMA",
    "BMJ",
    "Arthritis Care Res (Hoboken)",
    "Rheumatology (Oxford)",
    "Semin Arthritis Rheum",
    "Autoimmun Rev",
    "J Autoimmun",
    "RMD Open",
    "Arthritis Res Ther",
    "Osteoarthritis Cartilage",
    "Bone",
    "J Bone Miner Res",
    "Clin Rheumatol",
    "Best Pract Res Clin Rheumatol",
    "Curr Opin Rheumatol",
    "Ther Adv Musculoskelet Dis",
    "Scand J Rheumatol",
    "Joint Bone Spine",
    "Lupus Sci Med",
    "Lupus",
    "Clin Exp Rheumatol",
    "Mod Rheumatol",
    "Front Immunol",
    "J Rheum Dis",
];

/// Everything a run needs, fixed before the pipeline starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Subject filter ANDed into every search expression.
    pub topic: String,
    /// Journal restriction, order preserved in the query.
    pub journals: Vec<String>,
    /// Lookback window in days, both bounds inclusive.
    pub window_days: i64,
    /// Cap on identifiers requested from the search endpoint.
    pub max_results: usize,
    /// Number of ranked terms kept for display.
    pub top_n: usize,
    /// Smallest rendered font size in pixels.
    pub min_weight: f64,
    /// Largest rendered font size in pixels.
    pub max_weight: f64,
    /// Delay between successive metadata batches.
    pub pacing: Duration,
    /// Where the report document is written.
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            topic: "Rheumatology".to_string(),
            journals: TOP_JOURNALS.iter().copied().map(String::from).collect(),
            window_days: 30,
            max_results: 1000,
            top_n: 80,
            min_weight: 20.0,
            max_weight: 90.0,
            pacing: Duration::from_millis(100),
            output: PathBuf::from("index.html"),
        }
    }
}
