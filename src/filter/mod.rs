//! Filter module (verb module)
//!
//! Narrows a dataset to the rows satisfying every criterion. Criteria are
//! combined with logical AND, so the same row set comes back for any
//! application order, and applying a criterion twice changes nothing.

mod apply;
mod error;

pub use apply::filter;
pub use error::FilterError;
