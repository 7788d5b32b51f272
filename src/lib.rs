//! ridelens - Filter and aggregate bike-share rental data into chart-ready series
//!
//! This library provides:
//! - Tabular data types (TableSchema, Dataset, Record, Value)
//! - CSV loading against a declared schema
//! - Row filtering by equality, membership, and date-range criteria
//! - Grouped reduction (mean, sum, count) with canonical key domains
//! - Time bucketing (hour of day, rush-hour partition)
//! - The dashboard's fixed chart views
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `dataset/` - tabular data (TableSchema, Dataset, Record, Value, GroupKey)
//! - `query/` - request types (FilterCriterion, DataFilter, AggregationSpec)
//!
//! **Verb modules** (transformations):
//! - `loader/` - CSV → Dataset
//! - `filter/` - Dataset + criteria → Dataset
//! - `aggregate/` - Dataset + AggregationSpec → AggregateResult
//! - `bucket/` - Dataset + time field → Dataset with derived grouping field
//! - `report/` - pipeline composition and the canned dashboard views
//!
//! # Example
//!
//! ```ignore
//! use ridelens::{loader, filter, aggregate, TableSchema, FilterCriterion, AggregationSpec, Reduction, Value};
//!
//! let daily = loader::load_file("days_processed.csv", &TableSchema::daily())?;
//! let criteria = vec![FilterCriterion::equals("workingday", Value::Int(1))];
//! let filtered = filter::filter(&daily, &criteria)?;
//! let spec = AggregationSpec::new("weather_condition", "total_rentals", Reduction::Mean);
//! let series = aggregate::aggregate(&filtered, &spec)?;
//! ```
//!
//! Every pipeline stage is a pure function of its inputs; a loaded dataset is
//! never mutated, so it can be shared across concurrent invocations.

pub mod aggregate;
pub mod bucket;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod loader;
pub mod query;
pub mod report;

// Re-export commonly used types
pub use aggregate::{aggregate, AggregateError, AggregateResult, GroupEntry};
pub use bucket::{bucket_by_time, is_rush_hour, BucketError, TimeBucketing};
pub use dataset::{Dataset, Field, FieldType, GroupKey, Record, TableSchema, Value};
pub use error::LoadError;
pub use filter::{filter, FilterError};
pub use loader::{load_file, load_str};
pub use query::{
    AggregationSpec, DataFilter, FilterCriterion, Predicate, QueryRequest, Reduction, RequestError,
};
pub use report::{ChartKind, ChartSpec, ReportError};
