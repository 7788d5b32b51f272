//! Query module (noun module)
//!
//! Request types supplied by the filter-selection surface: typed filter
//! criteria, the JSON-facing `DataFilter`/`QueryRequest` forms, and the
//! aggregation spec driving the reduce step.

mod request;
mod spec;

pub use request::{DataFilter, FilterCriterion, Predicate, QueryRequest, RequestError};
pub use spec::{AggregationSpec, Reduction};
