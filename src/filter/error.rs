use std::fmt;

/// Errors that can occur while filtering a dataset
#[derive(Debug)]
pub enum FilterError {
    /// A criterion names a field absent from the dataset schema
    UnknownField(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::UnknownField(name) => {
                write!(f, "Filter field '{}' not found in dataset schema", name)
            }
        }
    }
}

impl std::error::Error for FilterError {}
