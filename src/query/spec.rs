//! Aggregation spec and reduction functions

use crate::dataset::GroupKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Reduction functions for the measurement field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// Arithmetic mean of values
    Mean,
    /// Sum of values
    Sum,
    /// Count of rows
    Count,
}

impl Default for Reduction {
    fn default() -> Self {
        Reduction::Mean
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => write!(f, "mean"),
            Reduction::Sum => write!(f, "sum"),
            Reduction::Count => write!(f, "count"),
        }
    }
}

/// Error when parsing a reduction string
#[derive(Debug, Clone)]
pub struct ParseReductionError {
    pub input: String,
}

impl fmt::Display for ParseReductionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown reduction '{}'. Valid options: mean, sum, count",
            self.input
        )
    }
}

impl std::error::Error for ParseReductionError {}

impl FromStr for Reduction {
    type Err = ParseReductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" | "avg" | "average" => Ok(Reduction::Mean),
            "sum" | "total" => Ok(Reduction::Sum),
            "count" => Ok(Reduction::Count),
            _ => Err(ParseReductionError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Reduction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Reduction::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Reduction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Grouping field plus reduction over a measurement field
///
/// The optional `key_domain` is the canonical, ordered set of group keys the
/// result must cover. Keys with no matching rows get the empty-group
/// sentinel; observed keys outside the domain are omitted. Without a domain,
/// the result covers the observed keys in ascending order.
#[derive(Debug, Clone)]
pub struct AggregationSpec {
    pub group_by: String,
    pub measure: String,
    pub reduction: Reduction,
    pub key_domain: Option<Vec<GroupKey>>,
}

impl AggregationSpec {
    pub fn new(
        group_by: impl Into<String>,
        measure: impl Into<String>,
        reduction: Reduction,
    ) -> Self {
        AggregationSpec {
            group_by: group_by.into(),
            measure: measure.into(),
            reduction,
            key_domain: None,
        }
    }

    pub fn with_key_domain(mut self, keys: Vec<GroupKey>) -> Self {
        self.key_domain = Some(keys);
        self
    }
}
