//! The top-level evaluation pass.
//!
//! A single-threaded, synchronous batch computation: partition anchors,
//! run every declared field of every matched pair through its comparator,
//! apply the asymmetric penalties for unpaired anchors, then freeze the
//! totals into an immutable report.

use serde::Serialize;
use tracing::debug;

use crate::accumulate::ConfusionAccumulator;
use crate::anchor::{partition_anchors, AnchorPartition};
use crate::compare::{compare_field, unmatched_counts, UnmatchedSide};
use crate::sequence::align_sequences;
use crate::types::counts::Metrics;
use crate::types::record::{RecordSet, SequenceSet};
use crate::types::spec::FieldRegistry;
use indexmap::IndexMap;

/// One matched-anchor field whose comparator emitted a penalty.
///
/// Raw values are reported verbatim so a reviewer can see exactly what the
/// two sides said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub anchor: String,
    pub field: String,
    pub predicted_raw: String,
    pub gold_raw: String,
}

/// The immutable result of one evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Per-field metrics, in registry declaration order.
    pub fields: IndexMap<String, Metrics>,

    /// Global metrics; counts equal the elementwise sum over all fields.
    pub overall: Metrics,

    /// Anchor classification for the run.
    pub anchors: AnchorPartition,

    /// Positional step-sequence metrics, when sequences were supplied.
    /// Kept separate from the field totals.
    pub sequences: Option<Metrics>,

    /// Literal per-field mismatches for matched anchors. Empty unless the
    /// evaluator was built with debug enabled.
    pub mismatches: Vec<Mismatch>,
}

/// Runs evaluation passes against a fixed field registry.
#[derive(Debug, Clone)]
pub struct Evaluator {
    registry: FieldRegistry,
    debug: bool,
}

impl Evaluator {
    pub fn new(registry: FieldRegistry) -> Self {
        Self {
            registry,
            debug: false,
        }
    }

    /// Collect literal mismatch explanations into the report.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Evaluate a predicted record set against the ground truth.
    pub fn evaluate(&self, predicted: &RecordSet, gold: &RecordSet) -> EvalReport {
        self.run(predicted, gold, None)
    }

    /// Evaluate records and, independently, ordered step sequences keyed by
    /// the same anchors.
    pub fn evaluate_with_sequences(
        &self,
        predicted: &RecordSet,
        gold: &RecordSet,
        predicted_steps: &SequenceSet,
        gold_steps: &SequenceSet,
    ) -> EvalReport {
        self.run(predicted, gold, Some((predicted_steps, gold_steps)))
    }

    fn run(
        &self,
        predicted: &RecordSet,
        gold: &RecordSet,
        steps: Option<(&SequenceSet, &SequenceSet)>,
    ) -> EvalReport {
        let anchors = partition_anchors(predicted, gold);
        let mut accumulator = ConfusionAccumulator::new(&self.registry);
        let mut mismatches = Vec::new();

        for anchor in &anchors.matched {
            let (Some(p), Some(g)) = (predicted.get(anchor), gold.get(anchor)) else {
                continue;
            };
            for spec in self.registry.iter() {
                let predicted_raw = p.field(&spec.name);
                let gold_raw = g.field(&spec.name);
                let counts = compare_field(&spec.comparator, predicted_raw, gold_raw);
                if self.debug && !counts.is_perfect() {
                    mismatches.push(Mismatch {
                        anchor: anchor.clone(),
                        field: spec.name.clone(),
                        predicted_raw: predicted_raw.to_string(),
                        gold_raw: gold_raw.to_string(),
                    });
                }
                accumulator.add(&spec.name, counts);
            }
        }

        for anchor in &anchors.missing {
            let Some(g) = gold.get(anchor) else { continue };
            for spec in self.registry.iter() {
                accumulator.add(
                    &spec.name,
                    unmatched_counts(&spec.comparator, g.field(&spec.name), UnmatchedSide::GoldOnly),
                );
            }
        }

        for anchor in &anchors.extra {
            let Some(p) = predicted.get(anchor) else { continue };
            for spec in self.registry.iter() {
                accumulator.add(
                    &spec.name,
                    unmatched_counts(
                        &spec.comparator,
                        p.field(&spec.name),
                        UnmatchedSide::PredictionOnly,
                    ),
                );
            }
        }

        let sequences = steps.map(|(p, g)| Metrics::from(align_sequences(p, g)));
        let (fields, overall) = accumulator.finalize();

        debug!(
            matched = anchors.matched.len(),
            missing = anchors.missing.len(),
            extra = anchors.extra.len(),
            tp = overall.counts.true_positives,
            fp = overall.counts.false_positives,
            fn_ = overall.counts.false_negatives,
            "evaluation pass complete"
        );

        EvalReport {
            fields,
            overall,
            anchors,
            sequences,
            mismatches,
        }
    }
}
