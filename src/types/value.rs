//! Cell value types: raw decoded input and formatted output.

use std::fmt;

use chrono::NaiveDateTime;

/// Magnitude beyond which an integer is no longer exactly representable
/// as an `f64`. Values above this take the arbitrary-precision integer
/// path through unit conversions.
pub const MAX_SAFE_INTEGER: i128 = (1i128 << 53) - 1;

/// A raw decoded cell value, as produced by the columnar decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// NULL / absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Machine-width integer value.
    Int(i64),
    /// Integer value that may exceed the safe-integer threshold.
    BigInt(i128),
    /// Floating point value.
    Float(f64),
    /// Fixed-point decimal magnitude (signed, unscaled).
    Decimal(i128),
    /// Already-decoded date/time value.
    Timestamp(NaiveDateTime),
    /// String value.
    Str(String),
    /// Nested struct value, field order preserved.
    Struct(Vec<(String, CellValue)>),
    /// List value.
    List(Vec<CellValue>),
}

impl CellValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check if the value is date-like: an already-decoded date object or
    /// a finite number.
    pub fn is_date_like(&self) -> bool {
        match self {
            CellValue::Timestamp(_) | CellValue::Int(_) => true,
            CellValue::Float(f) => f.is_finite(),
            _ => false,
        }
    }

    /// Check if the value is an integer (machine-width or big).
    pub fn is_integer(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::BigInt(_))
    }

    /// Get the value as a wide integer, if it is one.
    ///
    /// Covers both integer variants and the decimal magnitude.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            CellValue::Int(v) => Some(*v as i128),
            CellValue::BigInt(v) => Some(*v),
            CellValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Coerce the value to a boolean, JS-truthiness style.
    pub fn truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(b) => *b,
            CellValue::Int(v) => *v != 0,
            CellValue::BigInt(v) | CellValue::Decimal(v) => *v != 0,
            CellValue::Float(f) => *f != 0.0 && !f.is_nan(),
            CellValue::Str(s) => !s.is_empty(),
            CellValue::Timestamp(_) | CellValue::Struct(_) | CellValue::List(_) => true,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::BigInt(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Decimal(v) => write!(f, "{}", v),
            CellValue::Timestamp(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Str(s) => write!(f, "{}", s),
            CellValue::Struct(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
            CellValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A display-ready cell value, as produced by the formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedValue {
    /// NULL / absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Machine-width integer, passed through unchanged.
    Int(i64),
    /// Big integer, passed through unchanged.
    BigInt(i128),
    /// Floating point value, passed through unchanged.
    Float(f64),
    /// Formatted text (dates, times, decimals, intervals, fallbacks).
    Text(String),
    /// Naive instant: wall-clock fields preserved, offset dropped.
    DateTime(NaiveDateTime),
    /// JSON-safe nested value.
    Json(serde_json::Value),
}

impl FormattedValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, FormattedValue::Null)
    }

    /// Get the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormattedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedValue::Null => write!(f, "NULL"),
            FormattedValue::Bool(b) => write!(f, "{}", b),
            FormattedValue::Int(v) => write!(f, "{}", v),
            FormattedValue::BigInt(v) => write!(f, "{}", v),
            FormattedValue::Float(v) => write!(f, "{}", v),
            FormattedValue::Text(s) => write!(f, "{}", s),
            FormattedValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            FormattedValue::Json(v) => write!(f, "{}", v),
        }
    }
}
