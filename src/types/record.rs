//! Anchor-keyed record collections.
//!
//! A [`Record`] is one extracted entity (a synthesized product, say) keyed by
//! a domain anchor such as a CCDC registry number. Field values stay as raw,
//! unparsed strings - parsing is the comparator's job, never the caller's.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// One record: an anchor plus raw field values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    /// Domain identifier pairing this record with its counterpart.
    pub anchor: String,

    /// Field name to raw (unparsed) value.
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw value of a field, coerced to `""` when absent.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

/// An anchor-keyed collection of records.
///
/// Backed by a `BTreeMap` so anchor iteration is always sorted lexically -
/// report diffs across runs are used for regression detection, so iteration
/// order is part of the engine's contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: BTreeMap<String, Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from loose records.
    ///
    /// Anchors are trimmed. Records with an empty anchor cannot be paired
    /// with anything and are dropped, not counted. When two records share an
    /// anchor the later one wins; the collision is logged because it usually
    /// means the upstream extraction emitted the same product twice.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut out = BTreeMap::new();
        for mut record in records {
            let anchor = record.anchor.trim().to_string();
            if anchor.is_empty() {
                warn!("dropping record with empty anchor");
                continue;
            }
            record.anchor = anchor.clone();
            if out.insert(anchor.clone(), record).is_some() {
                warn!(anchor = %anchor, "duplicate anchor, keeping the later record");
            }
        }
        Self { records: out }
    }

    pub fn get(&self, anchor: &str) -> Option<&Record> {
        self.records.get(anchor)
    }

    /// Anchors in sorted order.
    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

/// One ordered sequence of step-type tokens for an anchor.
///
/// Order is semantically significant: "Add, Stir, Filter" and
/// "Filter, Stir, Add" describe different procedures, so a multiset
/// comparison would be wrong for these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub anchor: String,
    pub steps: Vec<String>,
}

impl SequenceRecord {
    pub fn new(anchor: impl Into<String>, steps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            anchor: anchor.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

/// An anchor-keyed collection of step sequences.
///
/// Same anchor hygiene as [`RecordSet`]: trimmed anchors, empty anchors
/// dropped, duplicate anchors resolved last-write-wins with a warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceSet {
    sequences: BTreeMap<String, Vec<String>>,
}

impl SequenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = SequenceRecord>) -> Self {
        let mut out = BTreeMap::new();
        for record in records {
            let anchor = record.anchor.trim().to_string();
            if anchor.is_empty() {
                warn!("dropping sequence with empty anchor");
                continue;
            }
            if out.insert(anchor.clone(), record.steps).is_some() {
                warn!(anchor = %anchor, "duplicate anchor, keeping the later sequence");
            }
        }
        Self { sequences: out }
    }

    /// Steps for an anchor, defaulting to the empty sequence when absent.
    pub fn steps(&self, anchor: &str) -> &[String] {
        self.sequences
            .get(anchor)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Anchors in sorted order.
    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl FromIterator<SequenceRecord> for SequenceSet {
    fn from_iter<I: IntoIterator<Item = SequenceRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
