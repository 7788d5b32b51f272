//! Table schema definitions
//!
//! The canonical daily/hourly schemas fix one name per semantic field; the
//! source data referenced the same columns under several spellings.

use super::value::FieldType;

/// One named, typed column in a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Field {
            name: name.into(),
            field_type,
        }
    }
}

/// Schema shared by every record of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    fields: Vec<Field>,
}

impl TableSchema {
    pub fn new(fields: Vec<Field>) -> Self {
        TableSchema { fields }
    }

    /// Canonical schema for the daily rental aggregates file
    pub fn daily() -> Self {
        TableSchema::new(vec![
            Field::new("date", FieldType::Date),
            Field::new("season", FieldType::Int),
            Field::new("workingday", FieldType::Int),
            Field::new("weather_condition", FieldType::Int),
            Field::new("total_rentals", FieldType::Int),
        ])
    }

    /// Canonical schema for the hourly rental aggregates file
    pub fn hourly() -> Self {
        TableSchema::new(vec![
            Field::new("date", FieldType::Date),
            Field::new("season", FieldType::Int),
            Field::new("hour", FieldType::Int),
            Field::new("workingday", FieldType::Int),
            Field::new("weather_condition", FieldType::Int),
            Field::new("total_rentals", FieldType::Int),
        ])
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Positional index of a field by name
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field_index(name).is_some()
    }

    /// Schema with one extra field appended. Used when bucketing derives a
    /// new grouping column.
    pub fn with_field(&self, field: Field) -> Self {
        let mut fields = self.fields.clone();
        fields.push(field);
        TableSchema { fields }
    }
}
