use std::collections::BTreeMap;

use crate::dataset::{Dataset, GroupKey};
use crate::query::{AggregationSpec, Reduction};
use serde::Serialize;

use super::error::AggregateError;

/// One entry of an aggregate result
///
/// `is_empty` marks the sentinel for a canonical key with no matching rows.
/// Its `value` is 0 by convention, including for mean, so the flag is the
/// only reliable way to tell "no data" from a real aggregate of 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry {
    pub key: GroupKey,
    pub value: f64,
    pub rows: u64,
    pub is_empty: bool,
}

impl GroupEntry {
    fn sentinel(key: GroupKey) -> Self {
        GroupEntry {
            key,
            value: 0.0,
            rows: 0,
            is_empty: true,
        }
    }
}

/// Ordered group key → reduced value mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub entries: Vec<GroupEntry>,
}

impl AggregateResult {
    pub fn get(&self, key: &GroupKey) -> Option<&GroupEntry> {
        self.entries.iter().find(|e| &e.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running totals for one group
#[derive(Debug, Default)]
struct Accumulator {
    sum: f64,
    rows: u64,
}

/// Group the dataset by the spec's grouping field and reduce the measurement
/// field within each group
///
/// Entries come out in ascending key order, or in the caller's canonical
/// order when the spec carries a key domain. Grouping uses a `BTreeMap`, so
/// repeated calls over the same inputs are bit-identical. A zero-row dataset
/// never fails; with a key domain every entry is the empty-group sentinel.
pub fn aggregate(
    dataset: &Dataset,
    spec: &AggregationSpec,
) -> Result<AggregateResult, AggregateError> {
    let group_index = dataset
        .schema()
        .field_index(&spec.group_by)
        .ok_or_else(|| AggregateError::UnknownField(spec.group_by.clone()))?;
    let measure_index = dataset
        .schema()
        .field_index(&spec.measure)
        .ok_or_else(|| AggregateError::UnknownField(spec.measure.clone()))?;

    let mut groups: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();

    for record in dataset.records() {
        let key = record
            .value(group_index)
            .group_key()
            .ok_or_else(|| AggregateError::NonDiscreteGroupField(spec.group_by.clone()))?;

        let acc = groups.entry(key.clone()).or_default();
        acc.rows += 1;

        match spec.reduction {
            Reduction::Count => {}
            Reduction::Mean | Reduction::Sum => {
                let measured = record.value(measure_index).as_f64().ok_or_else(|| {
                    AggregateError::NonNumericMeasurement {
                        field: spec.measure.clone(),
                        key: key.clone(),
                    }
                })?;
                acc.sum += measured;
            }
        }
    }

    let entries = match &spec.key_domain {
        // Canonical domain: exactly these keys, in this order. Keys without
        // rows get the sentinel; observed keys outside the domain are not
        // part of the chart's category axis and are dropped.
        Some(domain) => domain
            .iter()
            .map(|key| match groups.get(key) {
                Some(acc) => finish(key.clone(), acc, spec.reduction),
                None => GroupEntry::sentinel(key.clone()),
            })
            .collect(),
        None => groups
            .iter()
            .map(|(key, acc)| finish(key.clone(), acc, spec.reduction))
            .collect(),
    };

    Ok(AggregateResult { entries })
}

fn finish(key: GroupKey, acc: &Accumulator, reduction: Reduction) -> GroupEntry {
    let value = match reduction {
        Reduction::Mean => acc.sum / acc.rows as f64,
        Reduction::Sum => acc.sum,
        Reduction::Count => acc.rows as f64,
    };
    GroupEntry {
        key,
        value,
        rows: acc.rows,
        is_empty: false,
    }
}
