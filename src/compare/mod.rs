//! Field comparators and their dispatch.
//!
//! Every comparator is a pure function from two raw values (plus the
//! declared parameters) to a [`ConfusionCounts`] triple. Dispatch is an
//! exhaustive match over [`ComparatorKind`], so adding a comparator without
//! wiring it up is a compile error rather than a silent skip.

pub mod numeric;
pub mod series;
pub mod sets;
pub mod text;

use crate::normalize::is_not_applicable;
use crate::types::counts::ConfusionCounts;
use crate::types::spec::ComparatorKind;

/// Compare one field of a matched record pair.
///
/// A universal override precedes all comparator-specific logic: when both
/// sides are "not applicable" the field scores a single true positive,
/// whatever the comparator kind. Two records that both correctly report
/// "unknown" are a correct match, not an absence of signal.
pub fn compare_field(
    kind: &ComparatorKind,
    predicted_raw: &str,
    gold_raw: &str,
) -> ConfusionCounts {
    if is_not_applicable(predicted_raw) && is_not_applicable(gold_raw) {
        return ConfusionCounts::HIT;
    }

    match kind {
        ComparatorKind::ExactText => text::exact_text_counts(predicted_raw, gold_raw),
        ComparatorKind::Formula => text::formula_counts(predicted_raw, gold_raw),
        ComparatorKind::NumericSet { tolerance } => numeric::band_counts(
            &numeric::parse_numbers(predicted_raw),
            &numeric::parse_numbers(gold_raw),
            *tolerance,
        ),
        ComparatorKind::KeyedSeries { decimals } => series::series_counts(
            &series::parse_percent_series(predicted_raw),
            &series::parse_percent_series(gold_raw),
            *decimals,
        ),
        ComparatorKind::StringSet { delimiters } => {
            sets::set_counts(predicted_raw, gold_raw, delimiters)
        }
    }
}

/// Which side of an unmatched anchor a record sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedSide {
    /// The anchor exists in the ground truth only: penalties are misses.
    GoldOnly,
    /// The anchor exists in the prediction only: penalties are fabrications.
    PredictionOnly,
}

/// Score one field of a record whose anchor has no counterpart.
///
/// Scalar fields: a "not applicable" value scores a true positive (there
/// was nothing to get wrong), anything else one penalty unit. Set-valued
/// and keyed-series fields: one penalty unit per parsed element. The
/// penalty lands on fn for gold-only anchors and on fp for prediction-only
/// anchors.
pub fn unmatched_counts(kind: &ComparatorKind, raw: &str, side: UnmatchedSide) -> ConfusionCounts {
    let penalty = match kind {
        ComparatorKind::ExactText | ComparatorKind::Formula => {
            if is_not_applicable(raw) {
                return ConfusionCounts::HIT;
            }
            1
        }
        ComparatorKind::NumericSet { .. } => numeric::parse_numbers(raw).len() as u64,
        ComparatorKind::KeyedSeries { .. } => series::parse_percent_series(raw).len() as u64,
        ComparatorKind::StringSet { delimiters } => {
            sets::parse_string_set(raw, delimiters).len() as u64
        }
    };
    match side {
        UnmatchedSide::GoldOnly => ConfusionCounts::new(0, 0, penalty),
        UnmatchedSide::PredictionOnly => ConfusionCounts::new(0, penalty, 0),
    }
}
