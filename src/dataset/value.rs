//! Cell value and field type definitions

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported field types in a table schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 64-bit signed integer (category codes, counts)
    Int,
    /// 64-bit floating point (continuous measurements)
    Float,
    /// Boolean flag
    Bool,
    /// Variable-length string
    Str,
    /// Calendar date
    Date,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => write!(f, "int"),
            FieldType::Float => write!(f, "float"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Str => write!(f, "string"),
            FieldType::Date => write!(f, "date"),
        }
    }
}

/// Error when parsing a field type string
#[derive(Debug, Clone)]
pub struct ParseFieldTypeError {
    pub input: String,
}

impl fmt::Display for ParseFieldTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown field type '{}'. Valid options: int, float, bool, string, date",
            self.input
        )
    }
}

impl std::error::Error for ParseFieldTypeError {}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" | "i64" => Ok(FieldType::Int),
            "float" | "double" | "f64" => Ok(FieldType::Float),
            "bool" | "boolean" => Ok(FieldType::Bool),
            "string" | "str" | "text" => Ok(FieldType::Str),
            "date" => Ok(FieldType::Date),
            _ => Err(ParseFieldTypeError {
                input: s.to_string(),
            }),
        }
    }
}

impl FieldType {
    /// Check if values of this type can be reduced with mean/sum
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Int | FieldType::Float)
    }

    /// Check if values of this type form a discrete grouping domain
    pub fn is_discrete(&self) -> bool {
        !matches!(self, FieldType::Float)
    }

    /// Check if this is a temporal type
    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldType::Date)
    }
}

/// A single cell value in a record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Date(NaiveDate),
}

impl Value {
    /// The field type this value belongs to
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Int(_) => FieldType::Int,
            Value::Float(_) => FieldType::Float,
            Value::Bool(_) => FieldType::Bool,
            Value::Str(_) => FieldType::Str,
            Value::Date(_) => FieldType::Date,
        }
    }

    /// Numeric view of the value, for reductions. None for non-numeric types.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Discrete grouping key for this value. None for floats, which do not
    /// form a discrete domain.
    pub fn group_key(&self) -> Option<GroupKey> {
        match self {
            Value::Int(i) => Some(GroupKey::Int(*i)),
            Value::Bool(b) => Some(GroupKey::Bool(*b)),
            Value::Str(s) => Some(GroupKey::Str(s.clone())),
            Value::Date(d) => Some(GroupKey::Date(*d)),
            Value::Float(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

/// A discrete grouping key
///
/// Ordered so aggregate entries come out in a stable ascending order when the
/// caller does not supply a canonical key domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GroupKey {
    Bool(bool),
    Int(i64),
    Date(NaiveDate),
    Str(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Bool(b) => write!(f, "{}", b),
            GroupKey::Int(i) => write!(f, "{}", i),
            GroupKey::Date(d) => write!(f, "{}", d),
            GroupKey::Str(s) => write!(f, "{}", s),
        }
    }
}
