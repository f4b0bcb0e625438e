//! Column data type enum with type-specific attributes.
//!
//! This enum represents the physical column types of the columnar result
//! format with their type-specific metadata (unit, scale, timezone).
//!
//! Note: Nullability and extension annotations are field properties, not
//! type properties.

use std::fmt;

use super::field::Field;

/// Time unit for time, timestamp and duration columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Seconds.
    #[default]
    Second,
    /// Milliseconds.
    Millisecond,
    /// Microseconds.
    Microsecond,
    /// Nanoseconds.
    Nanosecond,
}

impl TimeUnit {
    /// Number of ticks of this unit per second.
    pub fn ticks_per_second(&self) -> i64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Millisecond => 1_000,
            TimeUnit::Microsecond => 1_000_000,
            TimeUnit::Nanosecond => 1_000_000_000,
        }
    }
}

/// Interval unit for interval columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    /// Two-limb (years, months) interval.
    YearMonth,
    /// (days, milliseconds) interval.
    DayTime,
    /// (months, days, nanoseconds) interval.
    MonthDayNano,
}

/// Physical column data type with type-specific attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    /// Boolean column.
    Boolean,
    /// Fixed-width integer column.
    Integer { bits: u8 },
    /// Floating point column.
    Float,
    /// Fixed-point decimal column with precision and scale.
    Decimal { precision: u8, scale: i8 },
    /// Calendar date column (no time-of-day).
    Date,
    /// Time-of-day column, stored as a unit-scaled integer.
    Time { unit: TimeUnit },
    /// Timestamp column, optionally anchored to a named timezone.
    Timestamp {
        unit: TimeUnit,
        timezone: Option<String>,
    },
    /// Interval column.
    Interval { unit: IntervalUnit },
    /// Elapsed-time duration column.
    Duration { unit: TimeUnit },
    /// Variable-length string column.
    Utf8,
    /// Nested struct column with named children.
    Struct(Vec<Field>),
    /// List column with a single child element type.
    List(Box<Field>),
}

impl ColumnType {
    /// Get the time unit (for time/timestamp/duration types, None otherwise).
    pub fn time_unit(&self) -> Option<TimeUnit> {
        match self {
            ColumnType::Time { unit }
            | ColumnType::Timestamp { unit, .. }
            | ColumnType::Duration { unit } => Some(*unit),
            _ => None,
        }
    }

    /// Get the declared timezone (for timestamp types, None otherwise).
    pub fn timezone(&self) -> Option<&str> {
        match self {
            ColumnType::Timestamp { timezone, .. } => timezone.as_deref(),
            _ => None,
        }
    }

    /// Get the decimal scale (for decimal types, 0 otherwise).
    pub fn scale(&self) -> i8 {
        match self {
            ColumnType::Decimal { scale, .. } => *scale,
            _ => 0,
        }
    }

    /// Get the struct children (for struct types, empty otherwise).
    pub fn children(&self) -> &[Field] {
        match self {
            ColumnType::Struct(children) => children,
            _ => &[],
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::Integer { bits } => write!(f, "INT{}", bits),
            ColumnType::Float => write!(f, "FLOAT"),
            ColumnType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({},{})", precision, scale)
            }
            ColumnType::Date => write!(f, "DATE"),
            ColumnType::Time { .. } => write!(f, "TIME"),
            ColumnType::Timestamp { timezone, .. } => match timezone {
                Some(tz) => write!(f, "TIMESTAMP({})", tz),
                None => write!(f, "TIMESTAMP"),
            },
            ColumnType::Interval { .. } => write!(f, "INTERVAL"),
            ColumnType::Duration { .. } => write!(f, "DURATION"),
            ColumnType::Utf8 => write!(f, "VARCHAR"),
            ColumnType::Struct(children) => {
                write!(f, "STRUCT({} fields)", children.len())
            }
            ColumnType::List(child) => write!(f, "LIST({})", child.data_type),
        }
    }
}
