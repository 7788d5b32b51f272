//! Integration tests for grouped reduction
//!
//! Covers the empty-group sentinel behavior: a canonical category with no
//! matching rows must still appear, flagged as empty rather than silently
//! reported as a mean of zero.

mod common;

use common::daily_fixture;
use ridelens::{
    aggregate, filter, AggregateError, AggregationSpec, FilterCriterion, GroupKey, Reduction,
    Value,
};

#[test]
fn test_mean_by_day_type() {
    let daily = daily_fixture();
    let spec = AggregationSpec::new("workingday", "total_rentals", Reduction::Mean);
    let result = aggregate::aggregate(&daily, &spec).unwrap();

    // weekend: (1000 + 800 + 1800) / 3, weekday: (1600 + 1400 + 1200 + 600 + 2000) / 5
    assert_eq!(result.get(&GroupKey::Int(0)).unwrap().value, 1200.0);
    assert_eq!(result.get(&GroupKey::Int(1)).unwrap().value, 1360.0);
    assert_eq!(result.get(&GroupKey::Int(0)).unwrap().rows, 3);
    assert_eq!(result.get(&GroupKey::Int(1)).unwrap().rows, 5);
}

#[test]
fn test_sum_by_weather() {
    let daily = daily_fixture();
    let spec = AggregationSpec::new("weather_condition", "total_rentals", Reduction::Sum);
    let result = aggregate::aggregate(&daily, &spec).unwrap();

    assert_eq!(result.get(&GroupKey::Int(1)).unwrap().value, 7800.0);
    assert_eq!(result.get(&GroupKey::Int(2)).unwrap().value, 2000.0);
    assert_eq!(result.get(&GroupKey::Int(3)).unwrap().value, 600.0);
    // weather 4 never occurs and no domain was supplied
    assert!(result.get(&GroupKey::Int(4)).is_none());
}

#[test]
fn test_impossible_filter_yields_sentinels_not_errors() {
    let daily = daily_fixture();
    // the fixture has no weather 4 rows at all, and no weather 3 on weekends
    let criteria = [
        FilterCriterion::equals("workingday", Value::Int(0)),
        FilterCriterion::is_in("weather_condition", vec![Value::Int(3), Value::Int(4)]),
    ];
    let filtered = filter::filter(&daily, &criteria).unwrap();
    assert!(filtered.is_empty());

    let spec = AggregationSpec::new("weather_condition", "total_rentals", Reduction::Mean)
        .with_key_domain(vec![GroupKey::Int(1), GroupKey::Int(2)]);
    let result = aggregate::aggregate(&filtered, &spec).unwrap();

    assert_eq!(result.len(), 2);
    for entry in &result.entries {
        assert!(entry.is_empty);
        assert_eq!(entry.value, 0.0);
        assert_eq!(entry.rows, 0);
    }
}

#[test]
fn test_sentinel_distinguishable_from_real_zero() {
    let daily = daily_fixture();
    let spec = AggregationSpec::new("weather_condition", "total_rentals", Reduction::Sum)
        .with_key_domain((1..=4).map(GroupKey::Int).collect());
    let result = aggregate::aggregate(&daily, &spec).unwrap();

    let missing = result.get(&GroupKey::Int(4)).unwrap();
    assert_eq!(missing.value, 0.0);
    assert!(missing.is_empty);

    let observed = result.get(&GroupKey::Int(3)).unwrap();
    assert!(!observed.is_empty);
}

#[test]
fn test_deterministic_across_calls() {
    let daily = daily_fixture();
    let spec = AggregationSpec::new("weather_condition", "total_rentals", Reduction::Mean);
    let a = aggregate::aggregate(&daily, &spec).unwrap();
    let b = aggregate::aggregate(&daily, &spec).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_entries_in_ascending_key_order() {
    let daily = daily_fixture();
    let spec = AggregationSpec::new("weather_condition", "total_rentals", Reduction::Count);
    let result = aggregate::aggregate(&daily, &spec).unwrap();
    let keys: Vec<_> = result.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![GroupKey::Int(1), GroupKey::Int(2), GroupKey::Int(3)]
    );
}

#[test]
fn test_group_by_date_field() {
    let daily = daily_fixture();
    let spec = AggregationSpec::new("date", "total_rentals", Reduction::Sum);
    let result = aggregate::aggregate(&daily, &spec).unwrap();
    // one group per calendar day
    assert_eq!(result.len(), 8);
}

#[test]
fn test_unknown_measure_field_fails() {
    let daily = daily_fixture();
    let spec = AggregationSpec::new("workingday", "nonexistent", Reduction::Sum);
    let err = aggregate::aggregate(&daily, &spec).unwrap_err();
    assert!(matches!(err, AggregateError::UnknownField(_)));
}
