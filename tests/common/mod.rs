//! Shared test utilities for integration tests

use ridelens::{loader, Dataset, TableSchema};

/// Load a CSV fixture from the tests/test_data directory
pub fn load_fixture(name: &str, schema: &TableSchema) -> Dataset {
    let path = format!("tests/test_data/{}", name);
    loader::load_file(&path, schema)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// The small daily aggregates fixture (8 rows, weather codes 1-3 observed)
pub fn daily_fixture() -> Dataset {
    load_fixture("days_small.csv", &TableSchema::daily())
}

/// The small hourly aggregates fixture (8 rows, one working day plus one
/// extra morning reading)
#[allow(dead_code)]
pub fn hourly_fixture() -> Dataset {
    load_fixture("hours_small.csv", &TableSchema::hourly())
}
