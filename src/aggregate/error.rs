use crate::dataset::GroupKey;
use std::fmt;

/// Errors that can occur during aggregation
#[derive(Debug)]
pub enum AggregateError {
    /// The grouping or measurement field is absent from the schema
    UnknownField(String),
    /// Mean/sum requested over a field holding a non-numeric value
    NonNumericMeasurement { field: String, key: GroupKey },
    /// The grouping field does not hold discrete values (floats)
    NonDiscreteGroupField(String),
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::UnknownField(name) => {
                write!(f, "Field '{}' not found in dataset schema", name)
            }
            AggregateError::NonNumericMeasurement { field, key } => write!(
                f,
                "Measurement field '{}' holds a non-numeric value in group '{}'",
                field, key
            ),
            AggregateError::NonDiscreteGroupField(name) => write!(
                f,
                "Field '{}' is not discrete and cannot be grouped by",
                name
            ),
        }
    }
}

impl std::error::Error for AggregateError {}
