//! Lenient parsing of resolved style strings.
//!
//! Rendering engines report lengths as strings (`"12px"`, `"1.5"`,
//! `"normal"`, `"auto"`). The analyzer reads them the way a script running
//! in the page would: the longest numeric prefix wins and anything
//! unparsable falls back to a default. Failing a whole slide because one
//! element reports `calc(...)` for a margin would be worse than treating the
//! margin as zero, so parse failures are never errors. They are reported
//! once through [`warn_once`].

use slidescore_common::warning::warn_once;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Parse the leading decimal number of `value` (`"12.5px"` → `12.5`).
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction and an optional exponent. Returns `None` when no digits lead
/// the string.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading integer of `value` (`"3"` → `3`, `"2.9"` → `2`,
/// `"auto"` → `None`). Out-of-range values saturate.
#[must_use]
pub fn parse_integer(value: &str) -> Option<i32> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }
    let magnitude = rest[..digit_count]
        .bytes()
        .fold(0_i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    let signed = if negative { -magnitude } else { magnitude };
    Some(i32::try_from(signed).unwrap_or(if negative { i32::MIN } else { i32::MAX }))
}

/// A pixel length where `0` and unparsable values both mean `fallback`.
///
/// `property` names the value in the lenient-parsing warning.
#[must_use]
pub fn length_or(value: &str, fallback: f64, property: &str) -> f64 {
    match parse_number(value) {
        Some(v) if v != 0.0 => v,
        Some(_) => fallback,
        None => {
            if !is_keyword_default(value) {
                let _ = warn_once(
                    "style",
                    &format!("unparsable {property} '{}', using {fallback}", value.trim()),
                );
            }
            fallback
        }
    }
}

/// A pixel length, `0` when unparsable.
#[must_use]
pub fn length_or_zero(value: &str, property: &str) -> f64 {
    length_or(value, 0.0, property)
}

/// Values that legitimately carry no number and need no warning.
fn is_keyword_default(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.eq_ignore_ascii_case("auto") || v.eq_ignore_ascii_case("normal")
}

/// Round to two decimals, the precision every reported percentage uses.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
