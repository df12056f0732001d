//! Text and number canonicalization shared by all comparators.
//!
//! Raw field values are copied out of papers by an upstream extraction
//! pipeline, so Unicode width, spacing, and case vary freely between the
//! predicted and ground-truth sides. Comparators never look at raw values
//! directly - everything goes through one of these folds first.

use unicode_normalization::UnicodeNormalization;

/// Sentinel strings treated as "explicitly unknown".
///
/// Membership is checked against the output of [`normalize_text`], so the
/// sentinels are listed in normalized form.
const NA_SENTINELS: &[&str] = &["n/a", "na", "not stated", "-", "—", ""];

/// Canonicalize free text for comparison.
///
/// Applies Unicode NFKC normalization, trims, collapses internal whitespace
/// runs to a single space, and lowercases.
pub fn normalize_text(s: &str) -> String {
    let folded: String = s.nfkc().collect();
    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether a raw value is an "explicitly unknown" marker.
///
/// Two records that both correctly report "unknown" are a correct match,
/// so every comparator checks this on both sides before its own logic.
pub fn is_not_applicable(s: &str) -> bool {
    NA_SENTINELS.contains(&normalize_text(s).as_str())
}

/// Canonicalize a chemical formula for comparison.
///
/// Formulas are case-sensitive (Co vs CO), so only Unicode NFKC folding and
/// whitespace removal are applied. Spacing is the one thing that genuinely
/// varies between sources.
pub fn normalize_formula(s: &str) -> String {
    s.nfkc().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_collapses_whitespace() {
        assert_eq!(normalize_text("  Zinc   Nitrate  "), "zinc nitrate");
        assert_eq!(normalize_text("KBr\tpellet"), "kbr pellet");
    }

    #[test]
    fn test_normalize_text_nfkc_folds_width() {
        // Full-width characters fold to ASCII under NFKC
        assert_eq!(normalize_text("ＫＢｒ"), "kbr");
    }

    #[test]
    fn test_na_sentinels() {
        assert!(is_not_applicable(""));
        assert!(is_not_applicable("  N/A "));
        assert!(is_not_applicable("Not Stated"));
        assert!(is_not_applicable("-"));
        assert!(is_not_applicable("—"));
        assert!(!is_not_applicable("0"));
        assert!(!is_not_applicable("none recorded"));
    }

    #[test]
    fn test_normalize_formula_preserves_case() {
        assert_eq!(
            normalize_formula("C42 H30 Co4 O12"),
            "C42H30Co4O12"
        );
        // CO (carbon monoxide) and Co (cobalt) must stay distinct
        assert_ne!(normalize_formula("CO"), normalize_formula("Co"));
    }
}
