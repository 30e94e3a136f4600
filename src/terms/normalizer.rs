//! Raw term normalization.
//!
//! Article metadata mixes genuinely topical vocabulary with indexing
//! boilerplate ("Humans", "Retrospective Studies") and with MeSH's inverted
//! qualifier phrasing ("Arthritis, Rheumatoid"). Normalization removes the
//! former and repairs the latter so downstream counting sees display-ready
//! terms.

/// Indexing boilerplate that says nothing about what an article is about.
///
/// Matched by exact string comparison after any title casing, so entries
/// are listed in their canonical MeSH capitalization.
const STOP_TERMS: [&str; 26] = [
    "Treatment Outcome",
    "Humans",
    "Female",
    "Male",
    "Adult",
    "Middle Aged",
    "Aged",
    "Adolescent",
    "Young Adult",
    "Child",
    "Animals",
    "Mice",
    "Rats",
    "Pregnancy",
    "Risk Factors",
    "Retrospective Studies",
    "Prospective Studies",
    "Case-Control Studies",
    "Incidence",
    "Prevalence",
    "Surveys and Questionnaires",
    "Sensitivity and Specificity",
    "Predictive Value of Tests",
    "Questionnaires",
    "Cohort Studies",
    "Severity of Illness Index",
];

/// Normalizes one raw term.
///
/// Rules, applied in order:
/// 1. Empty input passes through as `Some("")`.
/// 2. Stop-listed boilerplate is discarded (`None`).
/// 3. A term containing exactly one `", "` separator is treated as an
///    inverted `Subject, Qualifier` phrase and flipped to `Qualifier
///    Subject`.
/// 4. Anything else passes through unchanged.
///
/// Terms with two or more separators are left alone: flipping only the
/// first pair would garble phrases like `"Vitamin D, 25-Hydroxy, blood"`.
#[must_use]
pub fn normalize_term(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return Some(String::new());
    }
    if STOP_TERMS.contains(&raw) {
        return None;
    }

    let parts: Vec<&str> = raw.split(", ").collect();
    if parts.len() == 2 {
        return Some(format!("{} {}", parts[1], parts[0]));
    }

    Some(raw.to_string())
}

/// Title-cases `text` the way author keywords are canonicalized before
/// normalization: the first letter of every word is uppercased and the
/// rest lowercased, where a word is a maximal run of alphabetic
/// characters.
///
/// Any non-letter starts a new word, so `"t-cell"` becomes `"T-Cell"` and
/// `"covid-19 vaccine"` becomes `"Covid-19 Vaccine"`. Acronyms are folded
/// too (`"DNA"` becomes `"Dna"`); the cloud trades their casing for
/// case-insensitive keyword aggregation.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
