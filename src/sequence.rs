//! Positional scoring of ordered step sequences.
//!
//! Procedures are compared index by index up to the shorter length - not by
//! edit distance. A single early insertion or deletion therefore cascades
//! into mismatches for every later position. That harshness is a deliberate
//! scoring choice favoring exact ordering correctness; do not swap in a
//! Levenshtein alignment.

use std::collections::BTreeSet;

use crate::types::counts::ConfusionCounts;
use crate::types::record::SequenceSet;

/// Score predicted against gold step sequences across all anchors.
///
/// For each anchor in the union of both key sets (absent side defaulting to
/// the empty sequence), with `n = min(len(gold), len(predicted))` and `eq`
/// the number of positions `i < n` where the tokens are equal:
/// tp += eq, fp += len(predicted) - eq, fn += len(gold) - eq.
pub fn align_sequences(predicted: &SequenceSet, gold: &SequenceSet) -> ConfusionCounts {
    let anchors: BTreeSet<&str> = predicted.anchors().chain(gold.anchors()).collect();

    let mut totals = ConfusionCounts::ZERO;
    for anchor in anchors {
        let p = predicted.steps(anchor);
        let g = gold.steps(anchor);
        let n = p.len().min(g.len());
        let eq = (0..n).filter(|&i| p[i] == g[i]).count() as u64;
        totals += ConfusionCounts::new(eq, p.len() as u64 - eq, g.len() as u64 - eq);
    }
    totals
}
