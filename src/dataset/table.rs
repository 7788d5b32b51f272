//! Record and Dataset containers

use super::schema::{Field, TableSchema};
use super::value::Value;

/// One row of tabular data. Values are positional against the dataset schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    pub fn new(values: Vec<Value>) -> Self {
        Record { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at the given schema field index
    ///
    /// Panics if the index is out of range; use [`Record::get`] when the
    /// index has not been validated against the schema.
    pub fn value(&self, index: usize) -> &Value {
        &self.values[index]
    }

    /// Value at the given index, or None when out of range
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// Ordered sequence of records sharing one schema
///
/// Never mutated in place: `filter` and `bucket_by_time` build new datasets,
/// so a loaded dataset can be shared across concurrent pipeline invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: TableSchema,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(schema: TableSchema, records: Vec<Record>) -> Self {
        Dataset { schema, records }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New dataset with the same schema and the given record subset
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Dataset {
            schema: self.schema.clone(),
            records,
        }
    }

    /// New dataset with one derived column appended.
    ///
    /// `values` must hold exactly one value per record, in record order;
    /// panics on a length mismatch rather than truncating, which would leave
    /// records shorter than the schema.
    pub fn with_derived_field(&self, field: Field, values: Vec<Value>) -> Self {
        assert_eq!(
            values.len(),
            self.records.len(),
            "derived column length must match record count"
        );
        let schema = self.schema.with_field(field);
        let records = self
            .records
            .iter()
            .zip(values)
            .map(|(record, value)| {
                let mut row = record.values.clone();
                row.push(value);
                Record::new(row)
            })
            .collect();
        Dataset { schema, records }
    }
}
