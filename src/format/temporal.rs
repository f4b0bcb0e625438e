//! Date, time and datetime display formatting.
//!
//! Date and datetime values arrive from the decoder already converted to a
//! date object or an epoch-millisecond number, regardless of the unit the
//! column declares. Time values arrive as the raw unit-scaled integer and
//! must be adjusted to seconds using the field's unit before formatting.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::types::{CellValue, Field, TimeUnit, MAX_SAFE_INTEGER};

/// Convert a unit-scaled timestamp to epoch milliseconds.
///
/// Values within the safe-integer range divide in floating point, keeping
/// fractional seconds. Larger magnitudes divide as integers instead, which
/// truncates sub-second precision rather than silently corrupting the
/// seconds themselves.
fn convert_to_epoch_millis(timestamp: i128, unit: TimeUnit) -> Option<i64> {
    let ticks = unit.ticks_per_second() as i128;

    if timestamp.unsigned_abs() > MAX_SAFE_INTEGER as u128 {
        let seconds = timestamp / ticks;
        i64::try_from(seconds.checked_mul(1000)?).ok()
    } else {
        let seconds = timestamp as f64 / ticks as f64;
        let millis = seconds * 1000.0;
        if millis.is_finite() && millis.abs() < i64::MAX as f64 {
            Some(millis as i64)
        } else {
            None
        }
    }
}

/// Resolve a date-like cell value to a naive UTC datetime.
fn date_value_to_datetime(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::Timestamp(dt) => Some(*dt),
        CellValue::Int(millis) => {
            DateTime::from_timestamp_millis(*millis).map(|dt| dt.naive_utc())
        }
        CellValue::Float(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(*millis as i64).map(|dt| dt.naive_utc())
        }
        _ => None,
    }
}

/// Format a date value as `yyyy-MM-dd`.
///
/// Non-date input is logged and returned as its string form; this function
/// never fails.
pub fn format_date(value: &CellValue) -> String {
    match date_value_to_datetime(value) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => {
            warn!("Unsupported date value: {}", value);
            value.to_string()
        }
    }
}

/// Format a unit-scaled time value as `HH:mm:ss`, with `.SSS` appended when
/// the millisecond component is non-zero.
///
/// The unit comes from the field's time type; a missing field or unit is
/// interpreted as seconds.
pub fn format_time(timestamp: i128, field: Option<&Field>) -> String {
    let unit = field
        .and_then(|f| f.data_type.time_unit())
        .unwrap_or_default();

    let Some(millis) = convert_to_epoch_millis(timestamp, unit) else {
        warn!("Unsupported time value: {}", timestamp);
        return timestamp.to_string();
    };
    let Some(dt) = DateTime::from_timestamp_millis(millis) else {
        warn!("Time value out of range: {}", timestamp);
        return timestamp.to_string();
    };

    if dt.timestamp_subsec_millis() == 0 {
        dt.format("%H:%M:%S").to_string()
    } else {
        dt.format("%H:%M:%S%.3f").to_string()
    }
}

/// Convert a datetime value to a naive instant.
///
/// The field's declared timezone, when present, is applied first so the
/// wall-clock fields reflect that zone; the offset itself is then dropped.
/// Without a timezone the instant is kept as-is (UTC wall clock).
///
/// Malformed input logs a warning and yields `None` — downstream consumers
/// treat an unreadable datetime as absent rather than displaying a bogus
/// string.
pub fn format_datetime(value: &CellValue, field: Option<&Field>) -> Option<NaiveDateTime> {
    let instant: DateTime<Utc> = match value {
        CellValue::Timestamp(dt) => dt.and_utc(),
        CellValue::Int(millis) => match DateTime::from_timestamp_millis(*millis) {
            Some(dt) => dt,
            None => {
                warn!("Datetime value out of range: {}", millis);
                return None;
            }
        },
        CellValue::Float(millis) if millis.is_finite() => {
            match DateTime::from_timestamp_millis(*millis as i64) {
                Some(dt) => dt,
                None => {
                    warn!("Datetime value out of range: {}", millis);
                    return None;
                }
            }
        }
        other => {
            warn!("Unsupported datetime value: {}", other);
            return None;
        }
    };

    match field.and_then(|f| f.data_type.timezone()) {
        Some(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => Some(instant.with_timezone(&tz).naive_local()),
            Err(_) => {
                warn!("Unknown timezone: {}", tz_name);
                Some(instant.naive_utc())
            }
        },
        None => Some(instant.naive_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnType;
    use chrono::NaiveDate;

    fn time_field(unit: TimeUnit) -> Field {
        Field::new("t", ColumnType::Time { unit })
    }

    fn timestamp_field(timezone: Option<&str>) -> Field {
        Field::new(
            "ts",
            ColumnType::Timestamp {
                unit: TimeUnit::Millisecond,
                timezone: timezone.map(str::to_string),
            },
        )
    }

    #[test]
    fn test_format_date_epoch() {
        assert_eq!(format_date(&CellValue::Int(0)), "1970-01-01");
    }

    #[test]
    fn test_format_date_from_millis() {
        // 2024-10-21 00:00:00 UTC
        assert_eq!(format_date(&CellValue::Int(1_729_468_800_000)), "2024-10-21");
    }

    #[test]
    fn test_format_date_from_date_object() {
        let dt = NaiveDate::from_ymd_opt(1999, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        assert_eq!(format_date(&CellValue::Timestamp(dt)), "1999-06-15");
    }

    #[test]
    fn test_format_date_fallback() {
        let value = CellValue::Str("not a date".to_string());
        assert_eq!(format_date(&value), "not a date");
        assert_eq!(format_date(&CellValue::Float(f64::NAN)), "NaN");
    }

    #[test]
    fn test_format_time_seconds() {
        let field = time_field(TimeUnit::Second);
        assert_eq!(format_time(0, Some(&field)), "00:00:00");
        assert_eq!(format_time(3_661, Some(&field)), "01:01:01");
    }

    #[test]
    fn test_format_time_default_unit_is_seconds() {
        assert_eq!(format_time(3_661, None), "01:01:01");
    }

    #[test]
    fn test_format_time_milliseconds() {
        let field = time_field(TimeUnit::Millisecond);
        assert_eq!(format_time(3_661_000, Some(&field)), "01:01:01");
        assert_eq!(format_time(3_661_500, Some(&field)), "01:01:01.500");
    }

    #[test]
    fn test_format_time_microseconds() {
        let field = time_field(TimeUnit::Microsecond);
        assert_eq!(format_time(45_296_000_000, Some(&field)), "12:34:56");
        assert_eq!(format_time(45_296_789_000, Some(&field)), "12:34:56.789");
    }

    #[test]
    fn test_format_time_big_path_truncates_subseconds() {
        // Beyond 2^53 ticks: a nanosecond value with a .5s fraction loses
        // the fraction to the integer-division path.
        let field = time_field(TimeUnit::Nanosecond);
        // 10,000,000.5 seconds since epoch = 115 days + 17:46:40.5
        let value: i128 = 10_000_000_500_000_000;
        assert!(value > crate::types::MAX_SAFE_INTEGER);
        assert_eq!(format_time(value, Some(&field)), "17:46:40");
        // A sub-threshold value with the same fraction keeps it.
        assert_eq!(
            format_time(45_296_500_000_000, Some(&field)),
            "12:34:56.500"
        );
    }

    #[test]
    fn test_format_time_extreme_values_degrade() {
        assert_eq!(format_time(i128::MIN, None), i128::MIN.to_string());
        assert_eq!(format_time(i128::MAX, None), i128::MAX.to_string());
    }

    #[test]
    fn test_format_datetime_naive() {
        let dt = format_datetime(&CellValue::Int(0), Some(&timestamp_field(None))).unwrap();
        assert_eq!(dt, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_format_datetime_applies_timezone() {
        // 1970-01-01 00:00:00 UTC is 1969-12-31 19:00:00 in New York.
        let field = timestamp_field(Some("America/New_York"));
        let dt = format_datetime(&CellValue::Int(0), Some(&field)).unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(1969, 12, 31)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_format_datetime_unknown_timezone_degrades() {
        let field = timestamp_field(Some("Mars/Olympus_Mons"));
        let dt = format_datetime(&CellValue::Int(0), Some(&field)).unwrap();
        assert_eq!(dt.and_utc().timestamp(), 0);
    }

    #[test]
    fn test_format_datetime_malformed_is_none() {
        assert_eq!(
            format_datetime(&CellValue::Str("oops".to_string()), None),
            None
        );
        assert_eq!(format_datetime(&CellValue::Float(f64::INFINITY), None), None);
    }
}
