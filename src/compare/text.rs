//! Strict text and formula comparison.

use crate::normalize::{normalize_formula, normalize_text};
use crate::types::counts::ConfusionCounts;

/// Compare two raw values as whitespace-collapsed, case-folded text.
pub fn exact_text_counts(predicted_raw: &str, gold_raw: &str) -> ConfusionCounts {
    strict_counts(&normalize_text(predicted_raw), &normalize_text(gold_raw))
}

/// Compare two raw values as whitespace-stripped, case-preserving formulas.
pub fn formula_counts(predicted_raw: &str, gold_raw: &str) -> ConfusionCounts {
    strict_counts(
        &normalize_formula(predicted_raw),
        &normalize_formula(gold_raw),
    )
}

/// Scalar strict-match scoring over already-normalized values.
///
/// When both sides are non-empty and differ, the field is penalized twice:
/// once as a false positive (a wrong value was reported) and once as a
/// false negative (the true value was missed). fp and fn are deliberately
/// not mutually exclusive here.
fn strict_counts(predicted: &str, gold: &str) -> ConfusionCounts {
    let matched = !predicted.is_empty() && predicted == gold;
    ConfusionCounts::new(
        u64::from(matched),
        u64::from(!predicted.is_empty() && predicted != gold),
        u64::from(!gold.is_empty() && predicted != gold),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let counts = exact_text_counts("KBr  pellet", "kbr pellet");
        assert_eq!(counts, ConfusionCounts::new(1, 0, 0));
    }

    #[test]
    fn test_mismatch_penalized_twice() {
        // Both sides non-empty and different: one fp AND one fn
        let counts = exact_text_counts("KBr pellet", "nujol mull");
        assert_eq!(counts, ConfusionCounts::new(0, 1, 1));
    }

    #[test]
    fn test_prediction_missing_is_fn_only() {
        let counts = exact_text_counts("", "nujol mull");
        assert_eq!(counts, ConfusionCounts::new(0, 0, 1));
    }

    #[test]
    fn test_hallucinated_value_is_fp_only() {
        let counts = exact_text_counts("KBr pellet", "");
        assert_eq!(counts, ConfusionCounts::new(0, 1, 0));
    }

    #[test]
    fn test_formula_spacing_ignored_case_kept() {
        assert_eq!(
            formula_counts("C42 H30 Co4", "C42H30Co4"),
            ConfusionCounts::new(1, 0, 0)
        );
        assert_eq!(
            formula_counts("c42h30co4", "C42H30Co4"),
            ConfusionCounts::new(0, 1, 1)
        );
    }
}
