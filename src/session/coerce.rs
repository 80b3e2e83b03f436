//! Text-to-number coercion for the numeric form fields.
//!
//! Mirrors the unary-plus conversion a browser form applies: surrounding whitespace
//! is ignored, blank text is `0`, `0x`/`0o`/`0b` prefixes are radix literals,
//! `Infinity` is accepted with an optional sign, and anything else that is not a
//! decimal literal becomes NaN. Nothing here ever fails.

pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = radix_literal(trimmed) {
        return value;
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    // `f64::from_str` also takes "inf" and "nan", which a form would not.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }

    unsigned
        .parse::<f64>()
        .map(|value| sign * value)
        .unwrap_or(f64::NAN)
}

fn radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    // Digit by digit, so no sign is accepted and values past u64 still parse.
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Renders a number the way the form shows it when an existing product is opened:
/// whole numbers without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        format!("{value}")
    }
}
