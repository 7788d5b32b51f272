use crate::dataset::{Dataset, Field, FieldType, Value};

use super::error::BucketError;

/// Group label for rush-hour rows
pub const RUSH_LABEL: &str = "rush";
/// Group label for all other hours
pub const OFFPEAK_LABEL: &str = "offpeak";

/// Available time bucketings over an hour-of-day field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucketing {
    /// Validated pass-through: each hour 0-23 is its own bucket
    HourOfDay,
    /// Rush hours {7,8,9} and {17,18,19} vs. everything else
    RushHour,
}

impl TimeBucketing {
    /// Name of the derived grouping field
    pub fn field_name(&self) -> &'static str {
        match self {
            TimeBucketing::HourOfDay => "hour_of_day",
            TimeBucketing::RushHour => "rush_hour",
        }
    }

    fn field_type(&self) -> FieldType {
        match self {
            TimeBucketing::HourOfDay => FieldType::Int,
            TimeBucketing::RushHour => FieldType::Str,
        }
    }

    fn bucket(&self, hour: i64) -> Value {
        match self {
            TimeBucketing::HourOfDay => Value::Int(hour),
            TimeBucketing::RushHour => {
                let label = if is_rush_hour(hour) {
                    RUSH_LABEL
                } else {
                    OFFPEAK_LABEL
                };
                Value::Str(label.to_string())
            }
        }
    }
}

/// Check whether an hour falls in the morning {7,8,9} or evening {17,18,19}
/// rush windows
pub fn is_rush_hour(hour: i64) -> bool {
    matches!(hour, 7..=9 | 17..=19)
}

/// Derive a discrete grouping field from an hour-of-day integer column
///
/// Every valid hour maps to exactly one bucket; the partition is total and
/// exhaustive over 0-23. A value outside that range fails, as does a time
/// field that is missing or not integer-typed.
pub fn bucket_by_time(
    dataset: &Dataset,
    time_field: &str,
    bucketing: TimeBucketing,
) -> Result<Dataset, BucketError> {
    let index = dataset
        .schema()
        .field_index(time_field)
        .ok_or_else(|| BucketError::UnknownField(time_field.to_string()))?;
    if dataset.schema().fields()[index].field_type != FieldType::Int {
        return Err(BucketError::NonIntegerField(time_field.to_string()));
    }
    let derived_name = bucketing.field_name();
    if dataset.schema().has_field(derived_name) {
        return Err(BucketError::FieldExists(derived_name.to_string()));
    }

    let mut derived = Vec::with_capacity(dataset.len());
    for record in dataset.records() {
        let hour = match record.value(index) {
            Value::Int(h) => *h,
            _ => return Err(BucketError::NonIntegerField(time_field.to_string())),
        };
        if !(0..=23).contains(&hour) {
            return Err(BucketError::OutOfDomain {
                field: time_field.to_string(),
                value: hour,
            });
        }
        derived.push(bucketing.bucket(hour));
    }

    Ok(dataset.with_derived_field(Field::new(derived_name, bucketing.field_type()), derived))
}
