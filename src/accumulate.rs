//! Confusion count accumulation.
//!
//! Every contribution - matched-anchor field comparisons and unmatched-anchor
//! penalties alike - is routed through [`ConfusionAccumulator::add`], which
//! keeps the invariant that the global totals always equal the elementwise
//! sum of the per-field totals.

use indexmap::IndexMap;

use crate::types::counts::{ConfusionCounts, Metrics};
use crate::types::spec::FieldRegistry;

/// Mutable builder summing per-field and global counts for one run.
///
/// Owned by a single evaluation pass; never share one across runs.
#[derive(Debug)]
pub struct ConfusionAccumulator {
    fields: IndexMap<String, ConfusionCounts>,
    overall: ConfusionCounts,
}

impl ConfusionAccumulator {
    /// Seed every declared field with zero counts, in declaration order.
    ///
    /// Pre-seeding keeps fields that never receive a contribution (e.g. when
    /// both collections are empty) visible in the report, and fixes the
    /// report's row order up front.
    pub fn new(registry: &FieldRegistry) -> Self {
        Self {
            fields: registry
                .iter()
                .map(|spec| (spec.name.clone(), ConfusionCounts::ZERO))
                .collect(),
            overall: ConfusionCounts::ZERO,
        }
    }

    /// Add one contribution to a field's totals and the global totals.
    pub fn add(&mut self, field: &str, counts: ConfusionCounts) {
        *self.fields.entry(field.to_string()).or_default() += counts;
        self.overall += counts;
    }

    /// Derive rates and freeze the totals.
    pub fn finalize(self) -> (IndexMap<String, Metrics>, Metrics) {
        let fields = self
            .fields
            .into_iter()
            .map(|(name, counts)| (name, Metrics::from(counts)))
            .collect();
        (fields, Metrics::from(self.overall))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::spec::{ComparatorKind, FieldSpec};

    fn registry() -> FieldRegistry {
        FieldRegistry::new(vec![
            FieldSpec::new("formula", ComparatorKind::Formula),
            FieldSpec::new("ir_material", ComparatorKind::ExactText),
        ])
        .unwrap()
    }

    #[test]
    fn test_global_equals_sum_of_fields() {
        let mut acc = ConfusionAccumulator::new(&registry());
        acc.add("formula", ConfusionCounts::new(1, 0, 1));
        acc.add("ir_material", ConfusionCounts::new(2, 1, 0));
        acc.add("formula", ConfusionCounts::new(0, 1, 0));

        let (fields, overall) = acc.finalize();
        let summed = fields
            .values()
            .fold(ConfusionCounts::ZERO, |acc, m| acc + m.counts);
        assert_eq!(overall.counts, summed);
        assert_eq!(overall.counts, ConfusionCounts::new(3, 2, 1));
    }

    #[test]
    fn test_untouched_fields_stay_visible() {
        let acc = ConfusionAccumulator::new(&registry());
        let (fields, overall) = acc.finalize();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["formula"].counts, ConfusionCounts::ZERO);
        assert_eq!(overall.precision, 0.0);
        assert_eq!(overall.f1, 0.0);
    }

    #[test]
    fn test_field_order_follows_registry() {
        let mut acc = ConfusionAccumulator::new(&registry());
        // Contribute in the opposite order; report order must not change
        acc.add("ir_material", ConfusionCounts::HIT);
        acc.add("formula", ConfusionCounts::HIT);
        let (fields, _) = acc.finalize();
        let names: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["formula", "ir_material"]);
    }
}
