//! Interval display formatting.
//!
//! Two distinct shapes share the interval kind:
//!
//! - a physical year/month interval, decoded as a two-limb (years, months)
//!   integer pair and rendered as a phrase like `1 year 6 months`;
//! - a pandas closed/open numeric range carried by the `pandas.interval`
//!   extension, decoded as a `{left, right}` struct and rendered with
//!   brackets chosen by the range's closedness.
//!
//! Anything else falls back to the value's string form. The upstream decoder
//! is known to mis-report interval units in some cases, so the fallback is
//! deliberately permissive.

use crate::error::Result;
use crate::format::map_column_data;
use crate::types::{CellValue, ColumnType, Extension, Field};

/// Render a (years, months) pair as a phrase.
///
/// Zero components are omitted; an all-zero interval renders as `0 months`.
/// A component of magnitude exactly 1 stays singular.
fn parse_year_month(years: i64, months: i64) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(2);
    if years != 0 {
        let suffix = if years.abs() == 1 { "" } else { "s" };
        parts.push(format!("{} year{}", years, suffix));
    }
    if months != 0 {
        let suffix = if months.abs() == 1 { "" } else { "s" };
        parts.push(format!("{} month{}", months, suffix));
    }
    if parts.is_empty() {
        "0 months".to_string()
    } else {
        parts.join(" ")
    }
}

/// Extract a two-limb integer pair from a decoded list value.
fn as_two_limbs(value: &CellValue) -> Option<(i64, i64)> {
    let CellValue::List(items) = value else {
        return None;
    };
    if items.len() != 2 {
        return None;
    }
    let first = i64::try_from(items[0].as_i128()?).ok()?;
    let second = i64::try_from(items[1].as_i128()?).ok()?;
    Some((first, second))
}

/// Format an interval value to its display string.
///
/// Bracketed pandas ranges format their bounds recursively through
/// [`map_column_data`] using the struct's child types; an unsupported kind
/// in a bound escalates as a hard failure rather than guessing.
pub fn format_interval(value: &CellValue, field: &Field) -> Result<String> {
    // The upstream decoder mis-reports the interval unit in some cases, so
    // any physical interval carrying a two-limb pair is treated as
    // (years, months) regardless of the declared unit.
    if matches!(field.data_type, ColumnType::Interval { .. }) {
        if let Some((years, months)) = as_two_limbs(value) {
            return Ok(parse_year_month(years, months));
        }
    }

    if let Some(Extension::PandasInterval { closed }) = &field.extension {
        if let CellValue::Struct(entries) = value {
            let left = entries
                .iter()
                .find(|(name, _)| name == "left")
                .map(|(_, v)| v);
            let right = entries
                .iter()
                .find(|(name, _)| name == "right")
                .map(|(_, v)| v);

            if let (Some(left), Some(right)) = (left, right) {
                let children = field.data_type.children();
                let left_formatted = map_column_data(left, children.first())?;
                let right_formatted = map_column_data(right, children.get(1))?;

                return Ok(format!(
                    "{}{}, {}{}",
                    closed.left_bracket(),
                    left_formatted,
                    right_formatted,
                    closed.right_bracket()
                ));
            }
        }
    }

    Ok(value.to_string())
}
