//! Frequency aggregation and top-N ranking of normalized terms.

use std::collections::HashMap;

/// A normalized term together with its observation count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// The term exactly as it will be displayed.
    pub term: String,
    /// How many times the term was observed across all articles.
    pub count: usize,
}

/// Counts `terms` by exact string equality and returns the `top_n` most
/// frequent entries, highest count first.
///
/// Ties keep the order in which the tied terms were first observed, so the
/// ranking is reproducible for identical input. Case variants count
/// separately; callers canonicalize case upstream where they want folding.
#[must_use]
pub fn rank_terms(terms: &[String], top_n: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut slot_by_term: HashMap<&str, usize> = HashMap::new();

    for term in terms {
        if let Some(&slot) = slot_by_term.get(term.as_str()) {
            entries[slot].count += 1;
        } else {
            slot_by_term.insert(term.as_str(), entries.len());
            entries.push(FrequencyEntry {
                term: term.clone(),
                count: 1,
            });
        }
    }

    // Stable sort preserves first-encounter order within equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().copied().map(String::from).collect()
    }

    #[test]
    fn test_rank_counts_and_orders_descending() {
        let ranked = rank_terms(&terms(&["Lupus", "Bone Pain", "Lupus"]), 10);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].term, "Lupus");
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[1].term, "Bone Pain");
        assert_eq!(ranked[1].count, 1);
    }

    #[test]
    fn test_rank_ties_keep_first_encounter_order() {
        // "Gout" and "Uveitis" both appear twice; "Gout" was seen first
        let ranked = rank_terms(&terms(&["Gout", "Uveitis", "Uveitis", "Gout", "Fatigue"]), 10);

        assert_eq!(ranked[0].term, "Gout");
        assert_eq!(ranked[1].term, "Uveitis");
        assert_eq!(ranked[2].term, "Fatigue");
    }

    #[test]
    fn test_rank_truncates_to_top_n() {
        let ranked = rank_terms(&terms(&["A", "A", "A", "B", "B", "C"]), 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].term, "A");
        assert_eq!(ranked[1].term, "B");
    }

    #[test]
    fn test_rank_returns_everything_when_under_top_n() {
        let ranked = rank_terms(&terms(&["A", "B"]), 80);

        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_empty_input_yields_empty_ranking() {
        assert!(rank_terms(&[], 80).is_empty());
    }

    #[test]
    fn test_rank_is_case_sensitive() {
        let ranked = rank_terms(&terms(&["lupus", "Lupus"]), 10);

        assert_eq!(ranked.len(), 2, "Case variants must count separately: {ranked:?}");
    }

    #[test]
    fn test_rank_of_replayed_ranking_is_unchanged() {
        let ranked = rank_terms(&terms(&["B", "A", "A", "B", "C"]), 10);

        // Replay each entry count times in ranked order and rank again
        let mut replayed = Vec::new();
        for entry in &ranked {
            for _ in 0..entry.count {
                replayed.push(entry.term.clone());
            }
        }

        assert_eq!(rank_terms(&replayed, 10), ranked);
    }
}
