//! Confusion counts and the rates derived from them.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// A (true-positive, false-positive, false-negative) triple.
///
/// Every comparator emits one of these per field, and they are summed by
/// pure elementwise addition into per-field and global totals. Counts can
/// also be merged across independent evaluation runs to micro-aggregate
/// a corpus of documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Datapoints correctly recovered.
    pub true_positives: u64,

    /// Datapoints reported that the ground truth does not contain.
    pub false_positives: u64,

    /// Ground-truth datapoints that were missed.
    pub false_negatives: u64,
}

impl ConfusionCounts {
    /// The all-zero triple.
    pub const ZERO: Self = Self {
        true_positives: 0,
        false_positives: 0,
        false_negatives: 0,
    };

    /// A single correct match.
    pub const HIT: Self = Self {
        true_positives: 1,
        false_positives: 0,
        false_negatives: 0,
    };

    pub fn new(true_positives: u64, false_positives: u64, false_negatives: u64) -> Self {
        Self {
            true_positives,
            false_positives,
            false_negatives,
        }
    }

    /// Precision = tp / (tp + fp), or 0.0 when nothing was predicted.
    ///
    /// Division by zero is never an error - empty denominators yield 0.0
    /// by convention.
    pub fn precision(&self) -> f64 {
        let denom = self.true_positives + self.false_positives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// Recall = tp / (tp + fn), or 0.0 when the ground truth is empty.
    pub fn recall(&self) -> f64 {
        let denom = self.true_positives + self.false_negatives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// Harmonic mean of precision and recall, or 0.0 when both are zero.
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }

    /// True when no penalty was emitted (fp == 0 and fn == 0).
    pub fn is_perfect(&self) -> bool {
        self.false_positives == 0 && self.false_negatives == 0
    }

    /// Elementwise addition in place.
    pub fn merge(&mut self, other: Self) {
        *self += other;
    }
}

impl Add for ConfusionCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            true_positives: self.true_positives + other.true_positives,
            false_positives: self.false_positives + other.false_positives,
            false_negatives: self.false_negatives + other.false_negatives,
        }
    }
}

impl AddAssign for ConfusionCounts {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Finalized counts with their derived rates.
///
/// Produced once per field (and once globally) when an accumulator is
/// finalized; immutable from then on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(flatten)]
    pub counts: ConfusionCounts,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl From<ConfusionCounts> for Metrics {
    fn from(counts: ConfusionCounts) -> Self {
        Self {
            counts,
            precision: counts.precision(),
            recall: counts.recall(),
            f1: counts.f1(),
        }
    }
}
