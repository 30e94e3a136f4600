//! PubMed search expression assembly.
//!
//! A search expression is the conjunction of three clauses: a journal
//! disjunction, the topic, and an inclusive publication-date window. The
//! journal and date clauses are kept around after the build because the
//! per-term click-through links reuse them verbatim.

use chrono::NaiveDate;

/// Public browse endpoint that click-through links point at.
const PUBMED_BROWSE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// A fully assembled search expression and its reusable clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Complete conjunction submitted to the search endpoint.
    pub expression: String,
    /// Disjunction of `"<journal>"[Journal]` filters.
    pub journal_clause: String,
    /// Inclusive `"<past>":"<today>"[dp]` publication-date range.
    pub date_clause: String,
}

impl SearchQuery {
    /// Builds the search expression for `topic`, restricted to `journals`
    /// and to articles dated within `window_days` before `today`.
    ///
    /// Journal order is preserved, so two builds with the same inputs yield
    /// byte-identical expressions. `today` is passed in rather than read
    /// from the clock to keep the build deterministic.
    #[must_use]
    pub fn build(topic: &str, journals: &[String], window_days: i64, today: NaiveDate) -> Self {
        let journal_clause = journals
            .iter()
            .map(|journal| format!("\"{journal}\"[Journal]"))
            .collect::<Vec<_>>()
            .join(" OR ");

        let past = today - chrono::Duration::days(window_days);
        let date_clause = format!(
            "\"{}\":\"{}\"[dp]",
            past.format("%Y/%m/%d"),
            today.format("%Y/%m/%d")
        );

        let expression = format!("({journal_clause}) AND {topic} AND {date_clause}");

        Self {
            expression,
            journal_clause,
            date_clause,
        }
    }

    /// Builds the public click-through link for one ranked term.
    ///
    /// The link substitutes the term for the topic inside the same journal
    /// and date clauses, so readers land on exactly the articles that put
    /// the term in the cloud.
    #[must_use]
    pub fn term_link(&self, term: &str) -> String {
        let query = format!(
            "({}) AND {} AND {}",
            self.journal_clause, term, self.date_clause
        );
        format!("{PUBMED_BROWSE_URL}?term={}", urlencoding::encode(&query))
    }
}
