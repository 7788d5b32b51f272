//! Dataset module (noun module)
//!
//! In-memory tabular data: a `Dataset` is an ordered sequence of `Record`s
//! sharing one `TableSchema`. Datasets are immutable once built — filtering
//! and bucketing produce new derived datasets.

mod schema;
mod table;
mod value;

pub use schema::{Field, TableSchema};
pub use table::{Dataset, Record};
pub use value::{FieldType, GroupKey, Value};
