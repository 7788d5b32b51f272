//! Bucket module (verb module)
//!
//! Derives a discrete grouping field from an hour-of-day column. The derived
//! column is appended to a new dataset, ready for `aggregate` to group by.

mod error;
mod time;

pub use error::BucketError;
pub use time::{bucket_by_time, is_rush_hour, TimeBucketing, OFFPEAK_LABEL, RUSH_LABEL};
