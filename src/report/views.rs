//! Canned dashboard views
//!
//! Each view runs filter → (bucket) → aggregate with the canonical key
//! domain for its category axis, so a filter that empties a category still
//! shows that category with the empty-group sentinel instead of dropping it
//! from the chart.

use serde::Serialize;

use crate::aggregate::{aggregate, AggregateResult};
use crate::bucket::{bucket_by_time, TimeBucketing, OFFPEAK_LABEL, RUSH_LABEL};
use crate::dataset::{Dataset, GroupKey, Value};
use crate::filter::filter;
use crate::query::{AggregationSpec, FilterCriterion, QueryRequest, Reduction};

use super::error::ReportError;
use super::labels::weather_label;

/// How the rendering collaborator should draw a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    Line,
    Distribution,
}

/// A chart-ready series: the aggregate plus presentation tags
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub result: AggregateResult,
}

/// Run a JSON-facing request through the full pipeline
pub fn run_request(
    dataset: &Dataset,
    request: &QueryRequest,
) -> Result<AggregateResult, ReportError> {
    let criteria = request
        .filters
        .iter()
        .map(|f| f.resolve(dataset.schema()))
        .collect::<Result<Vec<_>, _>>()?;
    let filtered = filter(dataset, &criteria)?;
    let spec = AggregationSpec::new(&request.group_by, &request.measure, request.reduction);
    Ok(aggregate(&filtered, &spec)?)
}

/// Rentals by day type (weekend vs. weekday), bar chart
///
/// Both day types always appear, even when the filters leave one empty.
pub fn day_type_summary(
    daily: &Dataset,
    criteria: &[FilterCriterion],
    reduction: Reduction,
) -> Result<ChartSpec, ReportError> {
    let filtered = filter(daily, criteria)?;
    let spec = AggregationSpec::new("workingday", "total_rentals", reduction)
        .with_key_domain(vec![GroupKey::Int(0), GroupKey::Int(1)]);
    let result = aggregate(&filtered, &spec)?;
    Ok(ChartSpec {
        title: format!("Bike rentals by day type ({})", reduction),
        kind: ChartKind::Bar,
        x_label: "Day type".to_string(),
        y_label: y_label(reduction),
        result,
    })
}

/// Rentals by weather condition, bar chart over the full code domain 1-4
pub fn weather_summary(
    daily: &Dataset,
    criteria: &[FilterCriterion],
    reduction: Reduction,
) -> Result<ChartSpec, ReportError> {
    let filtered = filter(daily, criteria)?;
    let spec = AggregationSpec::new("weather_condition", "total_rentals", reduction)
        .with_key_domain((1..=4).map(GroupKey::Int).collect());
    let result = aggregate(&filtered, &spec)?;
    Ok(ChartSpec {
        title: format!("Bike rentals by weather condition ({})", reduction),
        kind: ChartKind::Bar,
        x_label: "Weather condition".to_string(),
        y_label: y_label(reduction),
        result,
    })
}

/// Mean rentals per hour of day, line chart over all 24 hours
pub fn hourly_profile(
    hourly: &Dataset,
    criteria: &[FilterCriterion],
) -> Result<ChartSpec, ReportError> {
    let filtered = filter(hourly, criteria)?;
    let spec = AggregationSpec::new("hour", "total_rentals", Reduction::Mean)
        .with_key_domain((0..=23).map(GroupKey::Int).collect());
    let result = aggregate(&filtered, &spec)?;
    Ok(ChartSpec {
        title: "Average bike rentals per hour".to_string(),
        kind: ChartKind::Line,
        x_label: "Hour".to_string(),
        y_label: "Average rentals".to_string(),
        result,
    })
}

/// Mean rentals during rush hours vs. the rest of the day, bar chart
pub fn rush_hour_summary(
    hourly: &Dataset,
    criteria: &[FilterCriterion],
) -> Result<ChartSpec, ReportError> {
    let filtered = filter(hourly, criteria)?;
    let bucketed = bucket_by_time(&filtered, "hour", TimeBucketing::RushHour)?;
    let spec = AggregationSpec::new(
        TimeBucketing::RushHour.field_name(),
        "total_rentals",
        Reduction::Mean,
    )
    .with_key_domain(vec![
        GroupKey::Str(RUSH_LABEL.to_string()),
        GroupKey::Str(OFFPEAK_LABEL.to_string()),
    ]);
    let result = aggregate(&bucketed, &spec)?;
    Ok(ChartSpec {
        title: "Rush hours vs. off-peak rentals".to_string(),
        kind: ChartKind::Bar,
        x_label: "Time period".to_string(),
        y_label: "Average rentals".to_string(),
        result,
    })
}

/// Mean rentals per hour, one series per weather condition code
///
/// Returns four line charts sharing the 0-23 hour axis, one for each weather
/// code; a code the filters rule out entirely still yields its chart, with
/// every hour carrying the empty-group sentinel.
pub fn hourly_weather_profile(
    hourly: &Dataset,
    criteria: &[FilterCriterion],
) -> Result<Vec<ChartSpec>, ReportError> {
    let filtered = filter(hourly, criteria)?;
    let spec = AggregationSpec::new("hour", "total_rentals", Reduction::Mean)
        .with_key_domain((0..=23).map(GroupKey::Int).collect());

    let mut charts = Vec::with_capacity(4);
    for code in 1..=4 {
        let series = filter(
            &filtered,
            &[FilterCriterion::equals("weather_condition", Value::Int(code))],
        )?;
        let result = aggregate(&series, &spec)?;
        let name = weather_label(code).unwrap_or("Unknown");
        charts.push(ChartSpec {
            title: format!("Average hourly rentals, {} weather", name),
            kind: ChartKind::Line,
            x_label: "Hour".to_string(),
            y_label: "Average rentals".to_string(),
            result,
        });
    }
    Ok(charts)
}

/// How hourly rental observations spread across the weather codes
///
/// The distribution chart's series is the observation count per weather code
/// over the full 1-4 domain; the smoothing of the drawn curve is the
/// rendering collaborator's concern, like every other visual treatment.
pub fn rentals_distribution(
    hourly: &Dataset,
    criteria: &[FilterCriterion],
) -> Result<ChartSpec, ReportError> {
    let filtered = filter(hourly, criteria)?;
    let spec = AggregationSpec::new("weather_condition", "total_rentals", Reduction::Count)
        .with_key_domain((1..=4).map(GroupKey::Int).collect());
    let result = aggregate(&filtered, &spec)?;
    Ok(ChartSpec {
        title: "Distribution of rentals by weather condition".to_string(),
        kind: ChartKind::Distribution,
        x_label: "Weather condition".to_string(),
        y_label: "Observations".to_string(),
        result,
    })
}

fn y_label(reduction: Reduction) -> String {
    match reduction {
        Reduction::Mean => "Average rentals".to_string(),
        Reduction::Sum => "Total rentals".to_string(),
        Reduction::Count => "Days".to_string(),
    }
}
