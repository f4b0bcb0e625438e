//! Decimal and float display formatting.

/// Format a fixed-point decimal magnitude to its display string.
///
/// The magnitude is the signed, unscaled integer the column stores; `scale`
/// is the number of fractional digits declared by the column type. Trailing
/// zeros of the fractional part are trimmed, and a fractional part that
/// trims to nothing is omitted entirely.
///
/// # Example
/// ```
/// use arrow_display_rs::format_decimal;
///
/// assert_eq!(format_decimal(12345, 3), "12.345");
/// assert_eq!(format_decimal(12000, 3), "12");
/// assert_eq!(format_decimal(-450, 3), "-0.45");
/// ```
pub fn format_decimal(value: i128, scale: i8) -> String {
    let scale = scale.max(0) as usize;
    let sign = if value < 0 { "-" } else { "" };
    let mut digits = value.unsigned_abs().to_string();

    if scale == 0 {
        return format!("{}{}", sign, digits);
    }

    // Pad with leading zeros so the digit string is at least `scale` long.
    if digits.len() < scale {
        digits = format!("{:0>width$}", digits, width = scale);
    }

    // The whole part is whatever remains before the last `scale` digits;
    // a value below 1 has none, so "0" stands in.
    let split = digits.len() - scale;
    let whole = if split == 0 { "0" } else { &digits[..split] };
    let fraction = digits[split..].trim_end_matches('0');

    if fraction.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    }
}

/// Format a float for display: grouped thousands, exactly 4 fractional
/// digits (en-US style).
///
/// Not invoked by the generic dispatch; float columns pass through
/// unchanged there. This is an opt-in utility for consumers that want a
/// fixed presentation.
pub fn format_float(num: f64) -> String {
    if !num.is_finite() {
        return num.to_string();
    }

    let fixed = format!("{:.4}", num.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let sign = if num.is_sign_negative() { "-" } else { "" };

    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

/// Insert `,` separators every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_basic() {
        assert_eq!(format_decimal(12345, 3), "12.345");
    }

    #[test]
    fn test_decimal_trailing_zeros_trimmed() {
        assert_eq!(format_decimal(12000, 3), "12");
        assert_eq!(format_decimal(123450, 3), "123.45");
    }

    #[test]
    fn test_decimal_scale_zero() {
        assert_eq!(format_decimal(0, 0), "0");
        assert_eq!(format_decimal(42, 0), "42");
        assert_eq!(format_decimal(-42, 0), "-42");
    }

    #[test]
    fn test_decimal_below_one() {
        assert_eq!(format_decimal(45, 3), "0.045");
        assert_eq!(format_decimal(5, 4), "0.0005");
    }

    #[test]
    fn test_decimal_negative() {
        assert_eq!(format_decimal(-12345, 3), "-12.345");
        assert_eq!(format_decimal(-450, 3), "-0.45");
    }

    #[test]
    fn test_decimal_zero_with_scale() {
        assert_eq!(format_decimal(0, 3), "0");
    }

    #[test]
    fn test_decimal_wide_magnitude() {
        assert_eq!(
            format_decimal(123456789012345678901234567890, 10),
            "12345678901234567890.123456789"
        );
    }

    #[test]
    fn test_float_grouping() {
        assert_eq!(format_float(1234.56789), "1,234.5679");
        assert_eq!(format_float(0.5), "0.5000");
        assert_eq!(format_float(1234567.0), "1,234,567.0000");
    }

    #[test]
    fn test_float_negative() {
        assert_eq!(format_float(-1234.5), "-1,234.5000");
    }

    #[test]
    fn test_float_non_finite() {
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }
}
