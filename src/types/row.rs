//! Row and result-set types.

use std::sync::Arc;

use super::field::{Field, Schema};
use super::value::{CellValue, FormattedValue};

/// A materialized result set: schema plus raw decoded rows.
///
/// This is the shape consumed from the session layer; each inner vector
/// holds one row's cell values in schema field order.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Shared column schema.
    pub schema: Arc<Schema>,
    /// Raw decoded rows, in schema field order.
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryResult {
    /// Create a result set from a schema and raw rows.
    pub fn new(schema: Arc<Schema>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { schema, rows }
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.field_names()
    }
}

/// A formatted row of query results.
///
/// Values are stored in schema field order; the schema is shared between
/// all rows of one result set.
#[derive(Debug, Clone)]
pub struct Row {
    /// Formatted cell values.
    values: Vec<FormattedValue>,
    /// Shared column schema (reference counted).
    schema: Arc<Schema>,
}

impl Row {
    /// Create a new row with values and shared schema.
    pub fn new(values: Vec<FormattedValue>, schema: Arc<Schema>) -> Self {
        Self { values, schema }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&FormattedValue> {
        self.values.get(index)
    }

    /// Get value by column name.
    pub fn get_by_name(&self, name: &str) -> Option<&FormattedValue> {
        self.schema
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[FormattedValue] {
        &self.values
    }

    /// Get column definitions.
    pub fn columns(&self) -> &[Field] {
        &self.schema.fields
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.field_names()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &FormattedValue> {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = FormattedValue;
    type IntoIter = std::vec::IntoIter<FormattedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a FormattedValue;
    type IntoIter = std::slice::Iter<'a, FormattedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
