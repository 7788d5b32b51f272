use std::fmt;

use crate::aggregate::AggregateError;
use crate::bucket::BucketError;
use crate::filter::FilterError;
use crate::query::RequestError;

/// Errors that can occur while building a report view
#[derive(Debug)]
pub enum ReportError {
    Request(RequestError),
    Filter(FilterError),
    Aggregate(AggregateError),
    Bucket(BucketError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Request(e) => write!(f, "Invalid request: {}", e),
            ReportError::Filter(e) => write!(f, "Filtering failed: {}", e),
            ReportError::Aggregate(e) => write!(f, "Aggregation failed: {}", e),
            ReportError::Bucket(e) => write!(f, "Bucketing failed: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Request(e) => Some(e),
            ReportError::Filter(e) => Some(e),
            ReportError::Aggregate(e) => Some(e),
            ReportError::Bucket(e) => Some(e),
        }
    }
}

impl From<RequestError> for ReportError {
    fn from(err: RequestError) -> Self {
        ReportError::Request(err)
    }
}

impl From<FilterError> for ReportError {
    fn from(err: FilterError) -> Self {
        ReportError::Filter(err)
    }
}

impl From<AggregateError> for ReportError {
    fn from(err: AggregateError) -> Self {
        ReportError::Aggregate(err)
    }
}

impl From<BucketError> for ReportError {
    fn from(err: BucketError) -> Self {
        ReportError::Bucket(err)
    }
}
