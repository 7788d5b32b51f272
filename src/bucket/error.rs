use std::fmt;

/// Errors that can occur while deriving a bucket field
#[derive(Debug)]
pub enum BucketError {
    /// The time field is absent from the dataset schema
    UnknownField(String),
    /// The derived field name collides with an existing field
    FieldExists(String),
    /// The time field is not integer-typed
    NonIntegerField(String),
    /// An hour value falls outside the declared 0–23 domain
    OutOfDomain { field: String, value: i64 },
}

impl fmt::Display for BucketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketError::UnknownField(name) => {
                write!(f, "Time field '{}' not found in dataset schema", name)
            }
            BucketError::FieldExists(name) => {
                write!(f, "Dataset already has a field named '{}'", name)
            }
            BucketError::NonIntegerField(name) => {
                write!(f, "Time field '{}' is not integer-typed", name)
            }
            BucketError::OutOfDomain { field, value } => {
                write!(
                    f,
                    "Value {} in field '{}' is outside the valid hour range 0-23",
                    value, field
                )
            }
        }
    }
}

impl std::error::Error for BucketError {}
