//! coercion helpers applied at every input boundary
//!
//! Numeric edge cases never fail outward. Missing, non-finite and (where noted)
//! negative values collapse to a safe default instead.

/// `value` if it is present, finite and non-negative, otherwise `default`
pub fn coerce_non_negative_finite(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => default,
    }
}

/// `value` if it is present and finite, otherwise 0 (sign is kept)
pub fn coerce_finite(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// whole number of days, floored and clamped at 0
pub fn coerce_days(value: Option<f64>) -> u64 {
    let days = coerce_finite(value).floor();
    if days <= 0.0 {
        0
    } else {
        days as u64
    }
}

/// lenient parse of a form field
///
/// Reads the longest numeric prefix after leading whitespace, so `"12abc"`
/// is 12 and `"1e3"` is 1000. Blank or non-numeric input yields `None`.
pub fn parse_field(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mantissa_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - mantissa_start;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digits += end - frac_start;
    }
    if digits == 0 {
        return match &s[mantissa_start..] {
            rest if rest.starts_with("Infinity") => {
                if s.starts_with('-') {
                    Some(f64::NEG_INFINITY)
                } else {
                    Some(f64::INFINITY)
                }
            }
            _ => None,
        };
    }

    // exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// parsed value of a form field, or 0 when it does not parse or is not finite
pub fn field_or_zero(raw: &str) -> f64 {
    coerce_finite(parse_field(raw))
}
