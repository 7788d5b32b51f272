use crate::dataset::{Dataset, Value};
use crate::query::{FilterCriterion, Predicate};

use super::error::FilterError;

/// Return the subset of records satisfying the logical AND of all criteria
///
/// An empty criteria sequence returns the dataset unchanged. A criterion
/// whose value never occurs in the data yields a valid empty result, not an
/// error; only a criterion naming a field the schema does not have fails.
pub fn filter(dataset: &Dataset, criteria: &[FilterCriterion]) -> Result<Dataset, FilterError> {
    // Resolve field indices up front so a typo'd field name is an error even
    // when no row would have matched anyway.
    let mut indices = Vec::with_capacity(criteria.len());
    for criterion in criteria {
        let index = dataset
            .schema()
            .field_index(&criterion.field)
            .ok_or_else(|| FilterError::UnknownField(criterion.field.clone()))?;
        indices.push(index);
    }

    let records = dataset
        .records()
        .iter()
        .filter(|record| {
            criteria
                .iter()
                .zip(&indices)
                .all(|(criterion, &index)| matches(&criterion.predicate, record.value(index)))
        })
        .cloned()
        .collect();

    Ok(dataset.with_records(records))
}

/// Check one predicate against one cell value
///
/// A type-mismatched comparison (e.g. a date range against an integer field)
/// matches nothing rather than erroring, consistent with the empty-result
/// policy for unobserved filter values.
fn matches(predicate: &Predicate, value: &Value) -> bool {
    match predicate {
        Predicate::Equals(want) => value == want,
        Predicate::In(set) => set.contains(value),
        Predicate::DateRange { start, end } => {
            matches!(value, Value::Date(d) if d >= start && d <= end)
        }
    }
}
