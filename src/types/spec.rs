//! Field declarations: which comparator runs for which field.
//!
//! The registry is data, not code - it can be built programmatically or
//! deserialized from JSON, and is validated once up front. Comparator
//! dispatch itself is a closed enum matched exhaustively, so "unknown
//! comparator" can only arise at the data boundary (deserializing or
//! parsing a kind name), where it fails loudly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{EvalError, Result};

/// Default tolerance for numeric band matching (wavenumber drift between
/// instruments).
pub const DEFAULT_BAND_TOLERANCE: i64 = 3;

/// Default decimal precision for keyed numeric series.
pub const DEFAULT_SERIES_DECIMALS: u32 = 2;

/// Default delimiter characters for string-set fields.
pub const DEFAULT_SET_DELIMITERS: &str = ";";

fn default_tolerance() -> i64 {
    DEFAULT_BAND_TOLERANCE
}

fn default_decimals() -> u32 {
    DEFAULT_SERIES_DECIMALS
}

fn default_delimiters() -> String {
    DEFAULT_SET_DELIMITERS.to_string()
}

/// The comparison strategy for one field, with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparatorKind {
    /// Strict equality of whitespace-collapsed, case-folded text.
    ExactText,

    /// Strict equality of whitespace-stripped, case-preserving formulas.
    Formula,

    /// Greedy tolerance matching of 3-4 digit numeric tokens
    /// (e.g. infrared band positions).
    NumericSet {
        #[serde(default = "default_tolerance")]
        tolerance: i64,
    },

    /// Per-key equality of an element -> percentage mapping at fixed
    /// decimal precision (e.g. elemental analysis weight percentages).
    KeyedSeries {
        #[serde(default = "default_decimals")]
        decimals: u32,
    },

    /// Unordered set comparison of delimited text elements
    /// (e.g. alternative product names).
    StringSet {
        /// Characters on which the raw value is split into elements.
        #[serde(default = "default_delimiters")]
        delimiters: String,
    },
}

impl FromStr for ComparatorKind {
    type Err = EvalError;

    /// Parse a bare kind name, with every parameter at its default.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact_text" => Ok(Self::ExactText),
            "formula" => Ok(Self::Formula),
            "numeric_set" => Ok(Self::NumericSet {
                tolerance: DEFAULT_BAND_TOLERANCE,
            }),
            "keyed_series" => Ok(Self::KeyedSeries {
                decimals: DEFAULT_SERIES_DECIMALS,
            }),
            "string_set" => Ok(Self::StringSet {
                delimiters: default_delimiters(),
            }),
            other => Err(EvalError::UnknownComparator(other.to_string())),
        }
    }
}

/// Declaration of one evaluated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, matching a key in the record's field map.
    pub name: String,

    /// How the field's values are compared.
    #[serde(flatten)]
    pub comparator: ComparatorKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, comparator: ComparatorKind) -> Self {
        Self {
            name: name.into(),
            comparator,
        }
    }
}

/// The validated, ordered set of field declarations for one evaluation.
///
/// Declaration order is preserved and determines report ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldRegistry {
    specs: Vec<FieldSpec>,
}

impl FieldRegistry {
    /// Validate and freeze a list of field declarations.
    ///
    /// Duplicate field names are a configuration error: the accumulator
    /// keys totals by name, so a second declaration would silently fold
    /// two different comparisons into one row.
    pub fn new(specs: Vec<FieldSpec>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(EvalError::DuplicateField(spec.name.clone()));
            }
        }
        Ok(Self { specs })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'de> Deserialize<'de> for FieldRegistry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let specs = Vec::<FieldSpec>::deserialize(deserializer)?;
        Self::new(specs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_name_is_loud() {
        let err = ComparatorKind::from_str("fuzzy_match").unwrap_err();
        assert!(matches!(err, EvalError::UnknownComparator(name) if name == "fuzzy_match"));
    }

    #[test]
    fn test_kind_names_round_trip() {
        assert_eq!(
            ComparatorKind::from_str("numeric_set").unwrap(),
            ComparatorKind::NumericSet { tolerance: 3 }
        );
        assert_eq!(
            ComparatorKind::from_str("keyed_series").unwrap(),
            ComparatorKind::KeyedSeries { decimals: 2 }
        );
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = FieldRegistry::new(vec![
            FieldSpec::new("formula", ComparatorKind::Formula),
            FieldSpec::new("formula", ComparatorKind::ExactText),
        ])
        .unwrap_err();
        assert!(matches!(err, EvalError::DuplicateField(name) if name == "formula"));
    }

    #[test]
    fn test_registry_preserves_declaration_order() {
        let registry = FieldRegistry::new(vec![
            FieldSpec::new("names", ComparatorKind::StringSet {
                delimiters: ";".into(),
            }),
            FieldSpec::new("formula", ComparatorKind::Formula),
        ])
        .unwrap();
        let names: Vec<_> = registry.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["names", "formula"]);
    }

    #[test]
    fn test_registry_from_json() {
        let json = r#"[
            {"name": "ir_bands", "kind": "numeric_set", "tolerance": 3},
            {"name": "ea_calc", "kind": "keyed_series"},
            {"name": "ir_material", "kind": "exact_text"}
        ]"#;
        let registry: FieldRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.iter().nth(1).unwrap().comparator,
            ComparatorKind::KeyedSeries { decimals: 2 }
        );
    }

    #[test]
    fn test_registry_from_json_unknown_kind_fails() {
        let json = r#"[{"name": "x", "kind": "levenshtein"}]"#;
        assert!(serde_json::from_str::<FieldRegistry>(json).is_err());
    }
}
