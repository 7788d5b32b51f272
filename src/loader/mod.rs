//! Dataset loader (verb module)
//!
//! Transforms CSV files into in-memory datasets. Columns are located by
//! header name against the caller's schema; extra columns in the file are
//! ignored, a missing schema column is an error. Cells are parsed per the
//! schema's declared field type.

use std::path::Path;

use chrono::NaiveDate;
use log::debug;

use crate::dataset::{Dataset, FieldType, Record, TableSchema, Value};
use crate::error::LoadError;

/// Load a dataset from a CSV file
pub fn load_file<P: AsRef<Path>>(path: P, schema: &TableSchema) -> Result<Dataset, LoadError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| LoadError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    let dataset = load_str(&contents, schema)?;
    debug!("loaded {} records from {}", dataset.len(), path_str);
    Ok(dataset)
}

/// Load a dataset from a CSV string
pub fn load_str(data: &str, schema: &TableSchema) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());

    // Map each schema field to its column position in this file
    let headers = reader.headers()?.clone();
    let mut columns = Vec::with_capacity(schema.len());
    for field in schema.fields() {
        let position = headers
            .iter()
            .position(|h| h == field.name)
            .ok_or_else(|| LoadError::MissingColumn {
                column: field.name.clone(),
            })?;
        columns.push(position);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let mut values = Vec::with_capacity(schema.len());
        for (field, &position) in schema.fields().iter().zip(&columns) {
            let cell = row.get(position).unwrap_or("");
            values.push(parse_cell(cell, field.field_type).ok_or_else(|| {
                LoadError::BadCell {
                    column: field.name.clone(),
                    line,
                    value: cell.to_string(),
                    expected: field.field_type,
                }
            })?);
        }
        records.push(Record::new(values));
    }

    Ok(Dataset::new(schema.clone(), records))
}

fn parse_cell(cell: &str, field_type: FieldType) -> Option<Value> {
    let cell = cell.trim();
    match field_type {
        FieldType::Int => cell.parse::<i64>().ok().map(Value::Int),
        FieldType::Float => cell.parse::<f64>().ok().map(Value::Float),
        FieldType::Bool => match cell {
            "0" | "false" => Some(Value::Bool(false)),
            "1" | "true" => Some(Value::Bool(true)),
            _ => None,
        },
        FieldType::Str => Some(Value::Str(cell.to_string())),
        FieldType::Date => NaiveDate::parse_from_str(cell, "%Y-%m-%d")
            .ok()
            .map(Value::Date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Field, GroupKey};

    const DAILY_CSV: &str = "\
date,season,workingday,weather_condition,total_rentals,temp
2011-01-01,1,0,2,985,0.34
2011-01-03,1,1,1,1349,0.20
";

    #[test]
    fn test_load_daily_csv() {
        let ds = load_str(DAILY_CSV, &TableSchema::daily()).unwrap();
        assert_eq!(ds.len(), 2);
        let rentals = ds.schema().field_index("total_rentals").unwrap();
        assert_eq!(ds.records()[0].value(rentals), &Value::Int(985));
        let date = ds.schema().field_index("date").unwrap();
        assert_eq!(
            ds.records()[1].value(date).group_key(),
            Some(GroupKey::Date(
                NaiveDate::from_ymd_opt(2011, 1, 3).unwrap()
            ))
        );
    }

    #[test]
    fn test_extra_columns_ignored() {
        // temp is present in the file but not in the schema
        let ds = load_str(DAILY_CSV, &TableSchema::daily()).unwrap();
        assert!(!ds.schema().has_field("temp"));
    }

    #[test]
    fn test_missing_column_fails() {
        let err = load_str(DAILY_CSV, &TableSchema::hourly()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column } if column == "hour"));
    }

    #[test]
    fn test_bad_cell_fails() {
        let data = "date,season,workingday,weather_condition,total_rentals\n\
                    2011-01-01,1,0,2,many\n";
        let err = load_str(data, &TableSchema::daily()).unwrap_err();
        match err {
            LoadError::BadCell { column, value, .. } => {
                assert_eq!(column, "total_rentals");
                assert_eq!(value, "many");
            }
            other => panic!("expected BadCell, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_fails() {
        let err = load_file("does_not_exist.csv", &TableSchema::daily()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_bool_parsing() {
        let schema = TableSchema::new(vec![Field::new("holiday", FieldType::Bool)]);
        let ds = load_str("holiday\n1\nfalse\n", &schema).unwrap();
        assert_eq!(ds.records()[0].value(0), &Value::Bool(true));
        assert_eq!(ds.records()[1].value(0), &Value::Bool(false));
    }
}
