//! Display weighting for ranked terms.

use serde::Serialize;

use super::ranker::FrequencyEntry;

/// One renderable word of the cloud payload.
///
/// Serialized field order matches the embedded payload the page script
/// consumes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayItem {
    /// Display text.
    pub label: String,
    /// Font size in pixels within the configured weight range.
    pub weight: f64,
    /// Click-through search link for the articles behind the term.
    pub link: String,
    /// Raw observation count, surfaced in the hover tooltip.
    pub count: usize,
}

/// Scales ranked entries into display items.
///
/// Each weight is `min_weight + (count / max) * (max_weight - min_weight)`
/// where `max` is the highest count in `entries`. The top entry therefore
/// gets exactly `max_weight`, and nothing falls below `min_weight`.
///
/// Entries are expected to be non-empty; an empty ranking short-circuits
/// to the fallback document before weighting. Empty input yields an empty
/// payload rather than dividing by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn map_weights(
    entries: &[FrequencyEntry],
    min_weight: f64,
    max_weight: f64,
    link_for: impl Fn(&str) -> String,
) -> Vec<DisplayItem> {
    let Some(first) = entries.first() else {
        return Vec::new();
    };
    let max_count = first.count.max(1);

    entries
        .iter()
        .map(|entry| {
            let share = entry.count as f64 / max_count as f64;
            DisplayItem {
                label: entry.term.clone(),
                weight: min_weight + share * (max_weight - min_weight),
                link: link_for(&entry.term),
                count: entry.count,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(term: &str, count: usize) -> FrequencyEntry {
        FrequencyEntry {
            term: term.to_string(),
            count,
        }
    }

    fn no_link(_term: &str) -> String {
        String::new()
    }

    #[test]
    fn test_map_weights_top_entry_gets_exactly_max_weight() {
        let items = map_weights(&[entry("Lupus", 4), entry("Gout", 1)], 20.0, 90.0, no_link);

        assert!(
            (items[0].weight - 90.0).abs() < 1e-9,
            "Expected exactly max weight, got: {}",
            items[0].weight
        );
    }

    #[test]
    fn test_map_weights_scales_linearly_by_share_of_max() {
        let items = map_weights(&[entry("Lupus", 2), entry("Gout", 1)], 20.0, 90.0, no_link);

        // Half the max count lands midway through the range
        assert!((items[1].weight - 55.0).abs() < 1e-9, "Got: {}", items[1].weight);
    }

    #[test]
    fn test_map_weights_stays_within_range() {
        let entries = [entry("A", 10), entry("B", 3), entry("C", 1)];
        let items = map_weights(&entries, 20.0, 90.0, no_link);

        for item in &items {
            assert!(
                item.weight >= 20.0 && item.weight <= 90.0,
                "Weight out of range: {item:?}"
            );
        }
    }

    #[test]
    fn test_map_weights_builds_link_per_term() {
        let items = map_weights(&[entry("Lupus", 2), entry("Gout", 1)], 20.0, 90.0, |term| {
            format!("https://example.org/?q={term}")
        });

        assert_eq!(items[0].link, "https://example.org/?q=Lupus");
        assert_eq!(items[1].link, "https://example.org/?q=Gout");
    }

    #[test]
    fn test_map_weights_preserves_ranking_order_and_counts() {
        let items = map_weights(&[entry("Lupus", 3), entry("Gout", 1)], 20.0, 90.0, no_link);

        assert_eq!(items[0].label, "Lupus");
        assert_eq!(items[0].count, 3);
        assert_eq!(items[1].label, "Gout");
        assert_eq!(items[1].count, 1);
    }

    #[test]
    fn test_map_weights_empty_input_yields_empty_payload() {
        assert!(map_weights(&[], 20.0, 90.0, no_link).is_empty());
    }

    #[test]
    fn test_display_item_serializes_expected_fields() {
        let items = map_weights(&[entry("Lupus", 2)], 20.0, 90.0, |_| "https://x/".to_string());

        let json = serde_json::to_value(&items).unwrap();
        let obj = &json[0];

        assert_eq!(obj["label"], "Lupus");
        assert_eq!(obj["weight"], 90.0);
        assert_eq!(obj["link"], "https://x/");
        assert_eq!(obj["count"], 2);
    }
}
