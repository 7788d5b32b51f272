//! Aggregate module (verb module)
//!
//! Groups a dataset by a discrete field and reduces a measurement field
//! within each group, producing the ordered series a chart consumes.
//!
//! Empty groups are valid results, not errors: when the caller supplies a
//! canonical key domain, a key with no matching rows gets a sentinel entry
//! (value 0, `is_empty` set) so "no data" stays distinguishable from a
//! genuine aggregate of zero.

mod error;
mod reduce;

pub use error::AggregateError;
pub use reduce::{aggregate, AggregateResult, GroupEntry};
