//! Filter criteria and the JSON-facing request types

use crate::dataset::{FieldType, TableSchema, Value};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Typed predicate over one named field
///
/// Applying a sequence of criteria is the logical AND of their predicates, so
/// application order never changes the result.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriterion {
    pub field: String,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Keep rows whose field equals the value
    Equals(Value),
    /// Keep rows whose field is a member of the set
    In(Vec<Value>),
    /// Keep rows whose date field falls in the inclusive range
    DateRange { start: NaiveDate, end: NaiveDate },
}

impl FilterCriterion {
    pub fn equals(field: impl Into<String>, value: Value) -> Self {
        FilterCriterion {
            field: field.into(),
            predicate: Predicate::Equals(value),
        }
    }

    pub fn is_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        FilterCriterion {
            field: field.into(),
            predicate: Predicate::In(values),
        }
    }

    pub fn date_range(field: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        FilterCriterion {
            field: field.into(),
            predicate: Predicate::DateRange { start, end },
        }
    }
}

/// Filter as supplied by the selection surface
///
/// The operator defaults to "in" for array values and "eq" for single values;
/// "between" expects a two-element array of ISO dates.
#[derive(Debug, Deserialize, Clone)]
pub struct DataFilter {
    pub field: String,
    #[serde(default)]
    pub operator: Option<String>,
    pub value: serde_json::Value,
}

/// Request body driving one pipeline invocation
#[derive(Debug, Deserialize, Default)]
pub struct QueryRequest {
    #[serde(default)]
    pub filters: Vec<DataFilter>,
    pub group_by: String,
    pub measure: String,
    #[serde(default)]
    pub reduction: super::Reduction,
}

/// Errors resolving a JSON-facing request against a schema
#[derive(Debug)]
pub enum RequestError {
    UnknownField(String),
    UnknownOperator(String),
    InvalidValue {
        field: String,
        expected: FieldType,
        value: serde_json::Value,
    },
    InvalidRange(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::UnknownField(name) => {
                write!(f, "Field '{}' not found in dataset schema", name)
            }
            RequestError::UnknownOperator(op) => {
                write!(f, "Unknown operator '{}'. Valid options: eq, in, between", op)
            }
            RequestError::InvalidValue {
                field,
                expected,
                value,
            } => write!(
                f,
                "Value {} is not a valid {} for field '{}'",
                value, expected, field
            ),
            RequestError::InvalidRange(field) => write!(
                f,
                "Range filter on '{}' expects a two-element array of ISO dates",
                field
            ),
        }
    }
}

impl std::error::Error for RequestError {}

impl DataFilter {
    /// Resolve this filter into a typed criterion against the schema
    pub fn resolve(&self, schema: &TableSchema) -> Result<FilterCriterion, RequestError> {
        let field = schema
            .get_field(&self.field)
            .ok_or_else(|| RequestError::UnknownField(self.field.clone()))?;

        // Default operator: "in" for arrays, "eq" for single values
        let operator = self.operator.clone().unwrap_or_else(|| {
            if self.value.is_array() {
                "in".to_string()
            } else {
                "eq".to_string()
            }
        });

        let predicate = match operator.as_str() {
            "eq" => Predicate::Equals(convert_value(field.field_type, &self.field, &self.value)?),
            "in" => {
                let items = self
                    .value
                    .as_array()
                    .ok_or_else(|| RequestError::InvalidValue {
                        field: self.field.clone(),
                        expected: field.field_type,
                        value: self.value.clone(),
                    })?;
                let values = items
                    .iter()
                    .map(|v| convert_value(field.field_type, &self.field, v))
                    .collect::<Result<Vec<_>, _>>()?;
                Predicate::In(values)
            }
            "between" => {
                let items = self
                    .value
                    .as_array()
                    .filter(|a| a.len() == 2)
                    .ok_or_else(|| RequestError::InvalidRange(self.field.clone()))?;
                let start = convert_date(&self.field, &items[0])?;
                let end = convert_date(&self.field, &items[1])?;
                Predicate::DateRange { start, end }
            }
            other => return Err(RequestError::UnknownOperator(other.to_string())),
        };

        Ok(FilterCriterion {
            field: self.field.clone(),
            predicate,
        })
    }
}

/// Convert a JSON value into a typed cell value for the given field type
fn convert_value(
    field_type: FieldType,
    field: &str,
    value: &serde_json::Value,
) -> Result<Value, RequestError> {
    let mismatch = || RequestError::InvalidValue {
        field: field.to_string(),
        expected: field_type,
        value: value.clone(),
    };

    match field_type {
        FieldType::Int => value.as_i64().map(Value::Int).ok_or_else(mismatch),
        FieldType::Float => value.as_f64().map(Value::Float).ok_or_else(mismatch),
        FieldType::Bool => value.as_bool().map(Value::Bool).ok_or_else(mismatch),
        FieldType::Str => value
            .as_str()
            .map(|s| Value::Str(s.to_string()))
            .ok_or_else(mismatch),
        FieldType::Date => convert_date(field, value).map(Value::Date),
    }
}

fn convert_date(field: &str, value: &serde_json::Value) -> Result<NaiveDate, RequestError> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .ok_or_else(|| RequestError::InvalidValue {
            field: field.to_string(),
            expected: FieldType::Date,
            value: value.clone(),
        })
}
