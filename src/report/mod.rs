//! Report module (verb module)
//!
//! Composes the pipeline stages into the dashboard's fixed chart set and the
//! request-driven entry point. Each view returns a `ChartSpec`: an ordered
//! series plus a chart-type tag and axis labels, which the rendering
//! collaborator consumes as plain data.

mod error;
mod labels;
mod views;

pub use error::ReportError;
pub use labels::{day_type_label, season_label, weather_label};
pub use views::{
    day_type_summary, hourly_profile, hourly_weather_profile, rentals_distribution, run_request,
    rush_hour_summary, weather_summary, ChartKind, ChartSpec,
};
