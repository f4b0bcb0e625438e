//! Field and Schema types describing result-set columns.
//!
//! A `Field` couples a column name with its physical `ColumnType` and an
//! optional semantic `Extension`. The semantic kind used for formatter
//! dispatch is resolved once per field, not re-derived per cell.

use std::sync::Arc;

use super::column_type::ColumnType;
use super::extension::Extension;

/// Semantic kind of a column, used to dispatch formatting.
///
/// Resolved from the physical type and the extension annotation. An
/// extension tag wins over the physical type: a `pandas.period` int64
/// column is a period, a `pandas.interval` struct column is an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticKind {
    Boolean,
    Integer,
    Float,
    Decimal,
    Date,
    Time,
    Datetime,
    Interval,
    Duration,
    Period,
    Object,
    List,
    /// String columns and anything without a more specific treatment.
    Other,
}

/// A column in a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Physical column data type.
    pub data_type: ColumnType,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Optional semantic extension annotation.
    pub extension: Option<Extension>,
}

impl Field {
    /// Create a nullable field without an extension annotation.
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            extension: None,
        }
    }

    /// Attach a parsed extension annotation.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Attach an extension annotation from its raw wire form
    /// (name + JSON-encoded metadata payload).
    pub fn with_raw_extension(self, name: &str, metadata_json: Option<&str>) -> Self {
        self.with_extension(Extension::from_raw(name, metadata_json))
    }

    /// Resolve the semantic kind of this field.
    pub fn semantic_kind(&self) -> SemanticKind {
        match &self.extension {
            Some(Extension::PandasPeriod { .. }) => return SemanticKind::Period,
            Some(Extension::PandasInterval { .. }) => return SemanticKind::Interval,
            _ => {}
        }
        match &self.data_type {
            ColumnType::Boolean => SemanticKind::Boolean,
            ColumnType::Integer { .. } => SemanticKind::Integer,
            ColumnType::Float => SemanticKind::Float,
            ColumnType::Decimal { .. } => SemanticKind::Decimal,
            ColumnType::Date => SemanticKind::Date,
            ColumnType::Time { .. } => SemanticKind::Time,
            ColumnType::Timestamp { .. } => SemanticKind::Datetime,
            ColumnType::Interval { .. } => SemanticKind::Interval,
            ColumnType::Duration { .. } => SemanticKind::Duration,
            ColumnType::Struct(_) => SemanticKind::Object,
            ColumnType::List(_) => SemanticKind::List,
            ColumnType::Utf8 => SemanticKind::Other,
        }
    }

    /// Check if this is a boolean column.
    pub fn is_boolean_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Boolean
    }

    /// Check if this is an integer column.
    pub fn is_integer_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Integer
    }

    /// Check if this is a floating point column.
    pub fn is_float_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Float
    }

    /// Check if this is a fixed-point decimal column.
    pub fn is_decimal_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Decimal
    }

    /// Check if this is a calendar date column.
    pub fn is_date_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Date
    }

    /// Check if this is a time-of-day column.
    pub fn is_time_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Time
    }

    /// Check if this is a timestamp column.
    pub fn is_datetime_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Datetime
    }

    /// Check if this is an interval column (physical interval or
    /// pandas interval extension).
    pub fn is_interval_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Interval
    }

    /// Check if this is a duration column.
    pub fn is_duration_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Duration
    }

    /// Check if this is a pandas period column.
    pub fn is_period_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Period
    }

    /// Check if this is a struct column.
    pub fn is_object_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::Object
    }

    /// Check if this is a list column.
    pub fn is_list_type(&self) -> bool {
        self.semantic_kind() == SemanticKind::List
    }
}

/// Ordered column schema shared by all rows of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Field definitions, in output column order.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Create a reference-counted schema from fields.
    pub fn shared(fields: Vec<Field>) -> Arc<Self> {
        Arc::new(Self::new(fields))
    }

    /// Get field names in schema order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get field by index.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Find field index by name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::column_type::{IntervalUnit, TimeUnit};
    use crate::types::extension::IntervalClosed;

    #[test]
    fn test_physical_kind_resolution() {
        assert_eq!(
            Field::new("a", ColumnType::Boolean).semantic_kind(),
            SemanticKind::Boolean
        );
        assert_eq!(
            Field::new("b", ColumnType::Date).semantic_kind(),
            SemanticKind::Date
        );
        assert_eq!(
            Field::new(
                "c",
                ColumnType::Timestamp {
                    unit: TimeUnit::Millisecond,
                    timezone: None
                }
            )
            .semantic_kind(),
            SemanticKind::Datetime
        );
        assert_eq!(
            Field::new("d", ColumnType::Utf8).semantic_kind(),
            SemanticKind::Other
        );
    }

    #[test]
    fn test_extension_wins_over_physical() {
        let period = Field::new("p", ColumnType::Integer { bits: 64 }).with_extension(
            Extension::PandasPeriod {
                freq: "D".to_string(),
            },
        );
        assert_eq!(period.semantic_kind(), SemanticKind::Period);
        assert!(period.is_period_type());
        assert!(!period.is_integer_type());

        let interval = Field::new(
            "i",
            ColumnType::Struct(vec![
                Field::new("left", ColumnType::Integer { bits: 64 }),
                Field::new("right", ColumnType::Integer { bits: 64 }),
            ]),
        )
        .with_extension(Extension::PandasInterval {
            closed: IntervalClosed::Both,
        });
        assert_eq!(interval.semantic_kind(), SemanticKind::Interval);
        assert!(interval.is_interval_type());
        assert!(!interval.is_object_type());
    }

    #[test]
    fn test_unknown_extension_falls_back_to_physical() {
        let field = Field::new("g", ColumnType::Struct(vec![])).with_extension(
            Extension::Other {
                name: "geoarrow.point".to_string(),
            },
        );
        assert_eq!(field.semantic_kind(), SemanticKind::Object);
    }

    #[test]
    fn test_predicates_mutually_exclusive() {
        let field = Field::new(
            "it",
            ColumnType::Interval {
                unit: IntervalUnit::YearMonth,
            },
        );
        assert!(field.is_interval_type());
        assert!(!field.is_duration_type());
        assert!(!field.is_date_type());
        assert!(!field.is_time_type());
    }

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(vec![
            Field::new("id", ColumnType::Integer { bits: 32 }),
            Field::new("name", ColumnType::Utf8),
        ]);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.field_names(), vec!["id", "name"]);
        assert_eq!(schema.find_by_name("name"), Some(1));
        assert_eq!(schema.find_by_name("missing"), None);
    }
}
