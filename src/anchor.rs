//! Anchor partitioning: pairing predicted records with ground truth.

use serde::{Deserialize, Serialize};

use crate::types::counts::ConfusionCounts;
use crate::types::record::RecordSet;

/// The three-way classification of anchors across two record sets.
///
/// All three vectors are sorted lexically, so the partition (and everything
/// derived from it) is identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorPartition {
    /// Anchors present on both sides.
    pub matched: Vec<String>,

    /// Anchors present in the ground truth only.
    pub missing: Vec<String>,

    /// Anchors present in the prediction only.
    pub extra: Vec<String>,
}

impl AnchorPartition {
    /// Anchor-presence retrieval score: did the pipeline find the right
    /// entities at all, before any field is compared?
    pub fn counts(&self) -> ConfusionCounts {
        ConfusionCounts::new(
            self.matched.len() as u64,
            self.extra.len() as u64,
            self.missing.len() as u64,
        )
    }
}

/// Classify every anchor of the two sets as matched, missing, or extra.
pub fn partition_anchors(predicted: &RecordSet, gold: &RecordSet) -> AnchorPartition {
    let mut partition = AnchorPartition::default();

    // Both sets iterate sorted, so the output vectors are sorted too.
    for anchor in gold.anchors() {
        if predicted.get(anchor).is_some() {
            partition.matched.push(anchor.to_string());
        } else {
            partition.missing.push(anchor.to_string());
        }
    }
    for anchor in predicted.anchors() {
        if gold.get(anchor).is_none() {
            partition.extra.push(anchor.to_string());
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::Record;

    fn record_set(anchors: &[&str]) -> RecordSet {
        RecordSet::from_records(anchors.iter().map(|a| Record::new(*a)))
    }

    #[test]
    fn test_three_way_partition() {
        let predicted = record_set(&["A", "B"]);
        let gold = record_set(&["B", "C"]);
        let partition = partition_anchors(&predicted, &gold);
        assert_eq!(partition.matched, vec!["B"]);
        assert_eq!(partition.missing, vec!["C"]);
        assert_eq!(partition.extra, vec!["A"]);
    }

    #[test]
    fn test_partition_is_sorted() {
        let predicted = record_set(&["z", "m", "a"]);
        let gold = record_set(&[]);
        let partition = partition_anchors(&predicted, &gold);
        assert_eq!(partition.extra, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_presence_counts() {
        let predicted = record_set(&["A", "B", "C"]);
        let gold = record_set(&["B", "C", "D", "E"]);
        let partition = partition_anchors(&predicted, &gold);
        assert_eq!(partition.counts(), ConfusionCounts::new(2, 1, 2));
    }

    #[test]
    fn test_empty_sets() {
        let partition = partition_anchors(&record_set(&[]), &record_set(&[]));
        assert_eq!(partition, AnchorPartition::default());
        assert_eq!(partition.counts(), ConfusionCounts::ZERO);
    }
}
