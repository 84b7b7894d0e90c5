//! Rating normalization onto a 0-5 scale.

use serde_json::Value;

/// Upper bound of the canonical scale.
pub const SCORE_MAX: f64 = 5.0;

/// Normalize a raw rating to `[0, 5]`, rounded to two decimals.
///
/// Numbers and numeric-looking strings are accepted. Anything above 5 is
/// taken to be on a larger scale: values up to 100 are divided by 20,
/// larger ones by 100.
pub fn normalize_score(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => parse_numeric_text(text)?,
        _ => return None,
    };

    if !raw.is_finite() {
        return None;
    }

    let scaled = if raw > SCORE_MAX {
        if raw <= 100.0 { raw / 20.0 } else { raw / 100.0 }
    } else {
        raw
    };

    let clamped = scaled.clamp(0.0, SCORE_MAX);
    Some((clamped * 100.0).round() / 100.0)
}

/// Pull a float out of text like `"85%"` or `"3,5"`.
///
/// Slash ratings such as `"4.5/5"` are not understood: the filter keeps both
/// numbers and reads them as `4.55`.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let mut cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    // One comma is a decimal separator; several are digit grouping.
    match cleaned.matches(',').count() {
        0 => {}
        1 => cleaned = cleaned.replace(',', "."),
        _ => cleaned.retain(|c| c != ','),
    }

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok()
}
