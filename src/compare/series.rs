//! Keyed numeric series comparison.
//!
//! Built for elemental analysis strings like "C 45.23; H 3.10; N 8.41":
//! a mapping from element symbol to weight percentage, compared per key at
//! fixed decimal precision.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::types::counts::ConfusionCounts;

static SERIES_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;,]\s*").expect("hard-coded pattern"));

/// "letters, whitespace, signed decimal number" at the start of a token.
static SERIES_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)\s+(-?\d+(?:\.\d+)?)").expect("hard-coded pattern"));

/// Parse a raw series string into a key -> value mapping.
///
/// Tokens that do not look like a key/value pair are skipped. The last
/// occurrence of a duplicate key wins. The ordered map keeps downstream
/// iteration deterministic.
pub fn parse_percent_series(s: &str) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return out;
    }
    for token in SERIES_DELIMITER.split(trimmed) {
        if let Some(caps) = SERIES_PAIR.captures(token) {
            if let Ok(value) = caps[2].parse::<f64>() {
                out.insert(caps[1].to_string(), value);
            }
        }
    }
    out
}

/// Round a value at `decimals` places onto an integer scale, so equality
/// checks never compare floats directly.
fn round_scaled(value: f64, decimals: u32) -> i64 {
    (value * 10f64.powi(decimals as i32)).round() as i64
}

/// Compare predicted against gold key/value mappings at fixed precision.
///
/// For each gold key: tp when the predicted mapping has the key and the
/// rounded values agree, fn otherwise - the fn branch covers both an absent
/// key and a present-but-mismatched value. Predicted keys absent from gold
/// are fp. A present-but-mismatched key contributes to fn only, never fp;
/// this asymmetry is deliberate and differs from the scalar comparators.
pub fn series_counts(
    predicted: &BTreeMap<String, f64>,
    gold: &BTreeMap<String, f64>,
    decimals: u32,
) -> ConfusionCounts {
    let mut true_positives = 0;
    let mut false_negatives = 0;

    for (key, &gold_value) in gold {
        match predicted.get(key) {
            Some(&value) if round_scaled(value, decimals) == round_scaled(gold_value, decimals) => {
                true_positives += 1;
            }
            _ => false_negatives += 1,
        }
    }

    let false_positives = predicted.keys().filter(|key| !gold.contains_key(*key)).count() as u64;
    ConfusionCounts::new(true_positives, false_positives, false_negatives)
}
