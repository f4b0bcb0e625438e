//! Cell value formatting: per-cell dispatch and whole-result-set mapping.
//!
//! `map_column_data` takes one cell's raw decoded value plus its column's
//! field descriptor and produces the display-ready value. This is
//! best-effort by design: a malformed cell degrades to a logged warning and
//! a safe fallback so one bad value never aborts a whole table. The two
//! exceptions are period and duration columns, which have no safe fallback
//! representation and fail hard until support lands.

pub mod interval;
pub mod numeric;
pub mod object;
pub mod period;
pub mod temporal;

pub use interval::format_interval;
pub use numeric::{format_decimal, format_float};
pub use object::format_object;
pub use period::{format_period, format_period_from_freq};
pub use temporal::{format_date, format_datetime, format_time};

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::{CellValue, Field, FormattedValue, QueryResult, Row, SemanticKind};

const NULL_CELL: CellValue = CellValue::Null;

/// Pass a value through unchanged, mapping each raw variant onto its
/// formatted counterpart.
fn passthrough(value: &CellValue) -> FormattedValue {
    match value {
        CellValue::Null => FormattedValue::Null,
        CellValue::Bool(b) => FormattedValue::Bool(*b),
        CellValue::Int(v) => FormattedValue::Int(*v),
        CellValue::BigInt(v) | CellValue::Decimal(v) => FormattedValue::BigInt(*v),
        CellValue::Float(f) => FormattedValue::Float(*f),
        CellValue::Timestamp(dt) => FormattedValue::DateTime(*dt),
        CellValue::Str(s) => FormattedValue::Text(s.clone()),
        CellValue::Struct(_) | CellValue::List(_) => {
            FormattedValue::Text(value.to_string())
        }
    }
}

/// Format one cell value for display using its column's field descriptor.
///
/// Dispatches on the field's semantic kind; precedence between kinds that
/// overlap physically (date before datetime, extension tags before physical
/// types) is resolved once in [`Field::semantic_kind`]. A missing descriptor
/// falls through to the string fallback.
///
/// # Errors
///
/// Period and duration columns return [`Error::UnsupportedSemanticType`];
/// everything else degrades instead of failing.
pub fn map_column_data(value: &CellValue, field: Option<&Field>) -> Result<FormattedValue> {
    if value.is_null() {
        return Ok(FormattedValue::Null);
    }
    let Some(field) = field else {
        return Ok(FormattedValue::Text(value.to_string()));
    };

    match field.semantic_kind() {
        SemanticKind::Date if value.is_date_like() => {
            Ok(FormattedValue::Text(format_date(value)))
        }
        SemanticKind::Time => match value.as_i128() {
            Some(timestamp) => Ok(FormattedValue::Text(format_time(timestamp, Some(field)))),
            None => Ok(FormattedValue::Text(value.to_string())),
        },
        SemanticKind::Datetime if value.is_date_like() => {
            Ok(match format_datetime(value, Some(field)) {
                Some(dt) => FormattedValue::DateTime(dt),
                None => FormattedValue::Null,
            })
        }
        SemanticKind::Period => Err(Error::unsupported("Period")),
        SemanticKind::Interval => Ok(FormattedValue::Text(format_interval(value, field)?)),
        SemanticKind::Duration => Err(Error::unsupported("Duration")),
        SemanticKind::Decimal => match value.as_i128() {
            Some(magnitude) => Ok(FormattedValue::Text(format_decimal(
                magnitude,
                field.data_type.scale(),
            ))),
            None => Ok(FormattedValue::Text(value.to_string())),
        },
        SemanticKind::Float => match value {
            CellValue::Float(f) if f.is_finite() => Ok(FormattedValue::Float(*f)),
            CellValue::Int(v) => Ok(FormattedValue::Int(*v)),
            _ => Ok(FormattedValue::Text(value.to_string())),
        },
        SemanticKind::Integer => Ok(passthrough(value)),
        SemanticKind::Object | SemanticKind::List => {
            Ok(FormattedValue::Json(format_object(value, Some(field))))
        }
        SemanticKind::Boolean => Ok(FormattedValue::Bool(value.truthy())),
        _ => Ok(FormattedValue::Text(value.to_string())),
    }
}

/// Format every cell of every row of a result set.
///
/// Rows come back in input order with values in schema field order; each
/// cell is formatted exactly once. A row shorter than the schema is padded
/// with nulls.
///
/// # Errors
///
/// Propagates the hard failures of [`map_column_data`]; tier-1 problems
/// never abort the result set.
pub fn map_struct_row_data(result: QueryResult) -> Result<Vec<Row>> {
    let QueryResult { schema, rows } = result;

    rows.into_iter()
        .map(|values| {
            let formatted = schema
                .fields
                .iter()
                .enumerate()
                .map(|(idx, field)| {
                    let raw = values.get(idx).unwrap_or(&NULL_CELL);
                    map_column_data(raw, Some(field))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Row::new(formatted, Arc::clone(&schema)))
        })
        .collect()
}
