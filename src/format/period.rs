//! pandas period display formatting.
//!
//! A period column stores a duration since the epoch plus a frequency code
//! in its extension metadata (`D`, `M`, `Q`, `W-SUN`, ...). Each supported
//! frequency renders the duration as the calendar string appropriate for
//! that unit. See the pandas period-alias table for the codes; nanosecond,
//! microsecond and business-day frequencies are not supported.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::types::{Extension, Field, MAX_SAFE_INTEGER};

const WEEKDAY_SHORT: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date is valid")
}

fn base_datetime() -> NaiveDateTime {
    base_date().and_hms_opt(0, 0, 0).expect("epoch time is valid")
}

/// Add a signed number of months to a date.
fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

fn format_ms(duration: i64, _param: Option<&str>) -> Option<String> {
    let dt = base_datetime().checked_add_signed(Duration::milliseconds(duration))?;
    Some(dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
}

fn format_sec(duration: i64, _param: Option<&str>) -> Option<String> {
    let dt = base_datetime().checked_add_signed(Duration::seconds(duration))?;
    Some(dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn format_min(duration: i64, _param: Option<&str>) -> Option<String> {
    let dt = base_datetime().checked_add_signed(Duration::minutes(duration))?;
    Some(dt.format("%Y-%m-%d %H:%M").to_string())
}

fn format_hours(duration: i64, _param: Option<&str>) -> Option<String> {
    let dt = base_datetime().checked_add_signed(Duration::hours(duration))?;
    Some(dt.format("%Y-%m-%d %H:%M").to_string())
}

fn format_day(duration: i64, _param: Option<&str>) -> Option<String> {
    let date = base_date().checked_add_signed(Duration::days(duration))?;
    Some(date.format("%Y-%m-%d").to_string())
}

fn format_month(duration: i64, _param: Option<&str>) -> Option<String> {
    let date = add_months(base_date(), duration)?;
    Some(date.format("%Y-%m").to_string())
}

fn format_year(duration: i64, _param: Option<&str>) -> Option<String> {
    let date = add_months(base_date(), duration.checked_mul(12)?)?;
    Some(date.format("%Y").to_string())
}

fn format_quarter(duration: i64, _param: Option<&str>) -> Option<String> {
    let date = add_months(base_date(), duration.checked_mul(3)?)?;
    let quarter = date.month0() / 3 + 1;
    Some(format!("{}Q{}", date.format("%Y"), quarter))
}

/// Render a weekly period as a `start/end` date range, where `end` falls on
/// the anchor weekday given by the frequency parameter (`W-SUN` .. `W-SAT`).
fn format_weeks(duration: i64, param: Option<&str>) -> Option<String> {
    let param = match param {
        Some(p) => p,
        None => {
            warn!("Frequency \"W\" requires a weekday parameter");
            return None;
        }
    };
    let day_index = match WEEKDAY_SHORT.iter().position(|d| *d == param) {
        Some(idx) => idx as i64,
        None => {
            warn!(
                "Invalid weekday: {}. Supported values: {:?}",
                param, WEEKDAY_SHORT
            );
            return None;
        }
    };

    let week_date = base_date().checked_add_signed(Duration::days(duration.checked_mul(7)?))?;
    // Anchor within the Sunday-started week containing week_date; the range
    // always spans the 6 days leading up to the anchor.
    let sunday = week_date
        .checked_sub_signed(Duration::days(week_date.weekday().num_days_from_sunday() as i64))?;
    let end = sunday.checked_add_signed(Duration::days(day_index))?;
    let start = end.checked_sub_signed(Duration::days(6))?;

    Some(format!(
        "{}/{}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    ))
}

/// Look up the formatter for a frequency code, including legacy aliases.
fn frequency_formatter(code: &str) -> Option<fn(i64, Option<&str>) -> Option<String>> {
    match code {
        "L" | "ms" => Some(format_ms),
        "S" | "s" => Some(format_sec),
        "T" | "min" => Some(format_min),
        "H" | "h" => Some(format_hours),
        "D" => Some(format_day),
        "M" => Some(format_month),
        "W" => Some(format_weeks),
        "Q" => Some(format_quarter),
        "Y" | "A" => Some(format_year),
        _ => None,
    }
}

/// Format a period duration using a pandas frequency string.
///
/// The frequency may carry a dash-separated parameter (`W-SUN`). Unknown
/// codes, out-of-range durations and bad weekly anchors log a warning and
/// return the duration's string form; this function never fails.
pub fn format_period_from_freq(duration: i128, freq: &str) -> String {
    let (code, param) = match freq.split_once('-') {
        Some((code, param)) => (code, Some(param)),
        None => (freq, None),
    };

    let Some(formatter) = frequency_formatter(code) else {
        warn!("Unsupported period frequency: {}", freq);
        return duration.to_string();
    };
    if duration.unsigned_abs() > MAX_SAFE_INTEGER as u128 {
        warn!(
            "Unsupported period value: {}. Supported range: [-{0}, {0}]",
            MAX_SAFE_INTEGER
        );
        return duration.to_string();
    }

    match formatter(duration as i64, param) {
        Some(formatted) => formatted,
        None => duration.to_string(),
    }
}

/// Format a period value using the field's extension metadata.
///
/// A missing field, missing extension, or an extension other than
/// `pandas.period` logs a warning and returns the duration's string form.
pub fn format_period(duration: i128, field: Option<&Field>) -> String {
    let Some(field) = field else {
        warn!("Field information is missing");
        return duration.to_string();
    };

    match &field.extension {
        Some(Extension::PandasPeriod { freq }) => format_period_from_freq(duration, freq),
        Some(other) => {
            warn!(
                "Unsupported extension name for period type: {}",
                other.name()
            );
            duration.to_string()
        }
        None => {
            warn!("Extension metadata is missing");
            duration.to_string()
        }
    }
}
