//! Integration tests for the filter laws
//!
//! Filtering is the logical AND of its criteria, so it must behave the same
//! for every application order, leave the dataset untouched when no criteria
//! are given, and treat unmatched filter values as valid empty results.

mod common;

use chrono::NaiveDate;
use common::daily_fixture;
use ridelens::{filter, FilterCriterion, FilterError, Value};

fn sample_criteria() -> Vec<FilterCriterion> {
    vec![
        FilterCriterion::equals("workingday", Value::Int(1)),
        FilterCriterion::is_in("weather_condition", vec![Value::Int(1), Value::Int(2)]),
        FilterCriterion::date_range(
            "date",
            NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2011, 1, 31).unwrap(),
        ),
    ]
}

#[test]
fn test_identity_on_empty_criteria() {
    let daily = daily_fixture();
    let filtered = filter::filter(&daily, &[]).unwrap();
    assert_eq!(filtered, daily);
}

#[test]
fn test_commutative_over_all_permutations() {
    let daily = daily_fixture();
    let criteria = sample_criteria();

    let reference = filter::filter(&daily, &criteria).unwrap();
    // weekday, weather 1 or 2, in January: rows 3, 4, 5
    assert_eq!(reference.len(), 3);

    let permutations: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for order in permutations {
        let permuted: Vec<FilterCriterion> =
            order.iter().map(|&i| criteria[i].clone()).collect();
        let result = filter::filter(&daily, &permuted).unwrap();
        assert_eq!(result, reference, "order {:?} changed the result", order);
    }
}

#[test]
fn test_idempotent() {
    let daily = daily_fixture();
    let criteria = sample_criteria();
    let once = filter::filter(&daily, &criteria).unwrap();
    let twice = filter::filter(&once, &criteria).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_commutative_with_repeated_field() {
    let daily = daily_fixture();
    let a = FilterCriterion::is_in("weather_condition", vec![Value::Int(1), Value::Int(3)]);
    let b = FilterCriterion::equals("weather_condition", Value::Int(1));

    let ab = filter::filter(&daily, &[a.clone(), b.clone()]).unwrap();
    let ba = filter::filter(&daily, &[b, a]).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.len(), 5);
}

#[test]
fn test_unobserved_value_is_empty_not_error() {
    let daily = daily_fixture();
    // weather code 4 never occurs in the fixture
    let filtered = filter::filter(
        &daily,
        &[FilterCriterion::equals("weather_condition", Value::Int(4))],
    )
    .unwrap();
    assert!(filtered.is_empty());
}

#[test]
fn test_unknown_field_is_an_error() {
    let daily = daily_fixture();
    let err = filter::filter(
        &daily,
        &[FilterCriterion::equals("nonexistent", Value::Int(1))],
    )
    .unwrap_err();
    assert!(matches!(err, FilterError::UnknownField(ref name) if name == "nonexistent"));
}

#[test]
fn test_filter_leaves_source_untouched() {
    let daily = daily_fixture();
    let before = daily.clone();
    let _ = filter::filter(&daily, &sample_criteria()).unwrap();
    assert_eq!(daily, before);
}
