//! Unordered set comparison of delimited text elements.
//!
//! Built for alternative-name lists: "compound 1; benzene" against
//! "Benzene; Compound 1" is a perfect match.

use std::collections::BTreeSet;

use crate::normalize::normalize_text;
use crate::types::counts::ConfusionCounts;

/// Split a raw value on any of the delimiter characters and normalize each
/// element. Elements that normalize to the empty string are dropped.
pub fn parse_string_set(s: &str, delimiters: &str) -> BTreeSet<String> {
    s.split(|c: char| delimiters.contains(c))
        .map(normalize_text)
        .filter(|element| !element.is_empty())
        .collect()
}

/// Set intersection scoring: tp = |pred ∩ gold|, fp = |pred \ gold|,
/// fn = |gold \ pred|.
pub fn set_counts(predicted_raw: &str, gold_raw: &str, delimiters: &str) -> ConfusionCounts {
    let predicted = parse_string_set(predicted_raw, delimiters);
    let gold = parse_string_set(gold_raw, delimiters);
    ConfusionCounts::new(
        predicted.intersection(&gold).count() as u64,
        predicted.difference(&gold).count() as u64,
        gold.difference(&predicted).count() as u64,
    )
}
