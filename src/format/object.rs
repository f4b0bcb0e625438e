//! JSON normalization for nested struct and list values.

use serde_json::{Map, Number, Value};

use crate::types::{CellValue, ColumnType, Field};

/// Normalize a nested value into a JSON-safe structure.
///
/// Two adjustments happen on the way down:
///
/// - big-integer leaves become their nearest number approximation: exact
///   when they fit `i64`, a lossy `f64` otherwise (precision loss accepted);
/// - for struct-typed fields, null-valued struct keys are dropped. The
///   decoder materializes the union of all row shapes as keys on every row,
///   so those nulls are an allocation artifact, not data. List elements
///   keep their nulls.
pub fn format_object(value: &CellValue, field: Option<&Field>) -> Value {
    let drop_nulls = matches!(
        field.map(|f| &f.data_type),
        Some(ColumnType::Struct(_))
    );
    normalize(value, drop_nulls)
}

fn approximate_big_int(value: i128) -> Value {
    match i64::try_from(value) {
        Ok(small) => Value::Number(Number::from(small)),
        Err(_) => Number::from_f64(value as f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    }
}

fn normalize(value: &CellValue, drop_nulls: bool) -> Value {
    match value {
        CellValue::Null => Value::Null,
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Int(v) => Value::Number(Number::from(*v)),
        CellValue::BigInt(v) | CellValue::Decimal(v) => approximate_big_int(*v),
        CellValue::Float(f) => Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        CellValue::Timestamp(dt) => {
            Value::String(dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
        }
        CellValue::Str(s) => Value::String(s.clone()),
        CellValue::Struct(entries) => {
            let mut object = Map::with_capacity(entries.len());
            for (name, child) in entries {
                if drop_nulls && child.is_null() {
                    continue;
                }
                object.insert(name.clone(), normalize(child, drop_nulls));
            }
            Value::Object(object)
        }
        CellValue::List(items) => Value::Array(
            items.iter().map(|item| normalize(item, drop_nulls)).collect(),
        ),
    }
}
