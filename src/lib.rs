//! Identifier-Anchored Evaluation Engine
//!
//! Compares a predicted record set against a ground-truth record set, both
//! keyed by a domain anchor (e.g. a CCDC registry number), and produces
//! field-level and aggregate accuracy metrics under domain-specific
//! equivalence rules: tolerance-based numeric matching, keyed series
//! comparison, order-sensitive sequence scoring, and "not applicable"-aware
//! equivalence.
//!
//! # Design Philosophy
//!
//! - Deterministic: identical inputs give bit-identical counts and sorted
//!   anchor orderings, so report diffs double as regression tests.
//! - Stateless: one pure batch pass per run; no I/O, no network, no shared
//!   mutable state.
//! - Forgiving on data, loud on configuration: malformed field values flow
//!   through the normal branches as empty strings, while a bad field
//!   registry is an error.
//!
//! # Usage
//!
//! ```rust
//! use synthesis_eval::{
//!     ComparatorKind, Evaluator, FieldRegistry, FieldSpec, Record, RecordSet,
//! };
//!
//! let registry = FieldRegistry::new(vec![
//!     FieldSpec::new("formula", ComparatorKind::Formula),
//!     FieldSpec::new("ir_bands", ComparatorKind::NumericSet { tolerance: 3 }),
//! ])?;
//!
//! let gold = RecordSet::from_records(vec![Record::new("1842375")
//!     .with_field("formula", "C42 H30 Co4 O12")
//!     .with_field("ir_bands", "1600, 1625 cm-1")]);
//! let predicted = gold.clone();
//!
//! let report = Evaluator::new(registry).evaluate(&predicted, &gold);
//! assert_eq!(report.overall.f1, 1.0);
//! # Ok::<(), synthesis_eval::EvalError>(())
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - text/number canonicalization and "not applicable"
//!   detection
//! - [`compare`] - the comparator family and its dispatch
//! - [`anchor`] - anchor partitioning (matched / missing / extra)
//! - [`accumulate`] - confusion count accumulation and finalization
//! - [`sequence`] - positional scoring of ordered step sequences
//! - [`evaluate`] - the top-level evaluation pass

pub mod accumulate;
pub mod anchor;
pub mod compare;
pub mod error;
pub mod evaluate;
pub mod normalize;
pub mod sequence;
pub mod types;

// Re-export the public API at the crate root
pub use accumulate::ConfusionAccumulator;
pub use anchor::{partition_anchors, AnchorPartition};
pub use compare::{compare_field, unmatched_counts, UnmatchedSide};
pub use error::{EvalError, Result};
pub use evaluate::{EvalReport, Evaluator, Mismatch};
pub use normalize::{is_not_applicable, normalize_formula, normalize_text};
pub use sequence::align_sequences;
pub use types::{
    counts::{ConfusionCounts, Metrics},
    record::{Record, RecordSet, SequenceRecord, SequenceSet},
    spec::{
        ComparatorKind, FieldRegistry, FieldSpec, DEFAULT_BAND_TOLERANCE,
        DEFAULT_SERIES_DECIMALS, DEFAULT_SET_DELIMITERS,
    },
};
