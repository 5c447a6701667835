//! # Format Module
//!
//! Converts numbers and raw JSON values into the text that callers and the
//! PDF report display.
//!
//! ## Why Not Plain `Display`?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rust `{}` for f64           Number text used on the wire               │
//! │  ──────────────────          ─────────────────────────────              │
//! │  inf                         Infinity                                   │
//! │  NaN                         NaN                                        │
//! │  -0                          0                                          │
//! │  1000000000000000000000      1e+21                                      │
//! │                                                                         │
//! │  ROI strings such as "249.8%" and report lines such as                 │
//! │  "Monthly Savings: $14,575" must render identically for every input,   │
//! │  including the degenerate ones.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::Value;

/// Magnitude from which numbers switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which numbers switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

// =============================================================================
// Plain Numbers
// =============================================================================

/// Renders a number in shortest round-trip form.
///
/// ## Example
/// ```rust
/// use roi_core::format::number_to_string;
///
/// assert_eq!(number_to_string(249.8), "249.8");
/// assert_eq!(number_to_string(250.0), "250");
/// assert_eq!(number_to_string(f64::INFINITY), "Infinity");
/// assert_eq!(number_to_string(f64::NAN), "NaN");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        // Rust prints "1e21" / "1.5e-7"; positive exponents carry an explicit sign
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }

    format!("{}", value)
}

/// Parses text produced by [`number_to_string`].
///
/// Returns `None` for anything that is not a number. Only the spelled-out
/// `Infinity` forms count; Rust's own `inf` / `nan` aliases are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        other => parse_decimal(other),
    }
}

/// Coerces free text into a number the way loose form input is read.
///
/// ## Rules
/// ```text
/// "" / "   "              → 0
/// " 42 " / "1e3" / "+Infinity" → 42 / 1000 / Infinity
/// "0x1A" / "0o17" / "0b101"    → 26 / 15 / 5   (unsigned only)
/// "inf", "nan", "1_000", "12px" → NaN
/// ```
///
/// ## Example
/// ```rust
/// use roi_core::format::coerce_text;
///
/// assert_eq!(coerce_text(" 42 "), 42.0);
/// assert_eq!(coerce_text("0x1A"), 26.0);
/// assert!(coerce_text("inf").is_nan());
/// ```
pub fn coerce_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    parse_number(trimmed).unwrap_or(f64::NAN)
}

/// Integer literal prefixes accepted by [`coerce_text`].
const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

/// Decimal literal: digits, one optional sign, point and exponent.
fn parse_decimal(text: &str) -> Option<f64> {
    let allowed = |b: u8| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-');
    if !text.bytes().all(allowed) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

// =============================================================================
// Grouped Numbers
// =============================================================================

/// Renders a number with thousands separators (en-US grouping, at most
/// three fraction digits).
///
/// ## Example
/// ```rust
/// use roi_core::format::group_thousands;
///
/// assert_eq!(group_thousands(174900.0), "174,900");
/// assert_eq!(group_thousands(-1234567.0), "-1,234,567");
/// assert_eq!(group_thousands(999.0), "999");
/// ```
///
/// ## Report Usage
/// ```text
/// results.monthly_savings = 14575
///      │
///      ▼
/// group_thousands() ← THIS FUNCTION
///      │
///      ▼
/// "Monthly Savings: $14,575"
/// ```
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

// =============================================================================
// Raw JSON Values
// =============================================================================

/// Renders a raw record field the way string interpolation shows it.
///
/// Absent fields render as `undefined` so that a report built from an
/// incomplete record still shows which values were never supplied.
///
/// ## Example
/// ```rust
/// use roi_core::format::display_value;
/// use serde_json::json;
///
/// assert_eq!(display_value(Some(&json!(0.5))), "0.5");
/// assert_eq!(display_value(Some(&json!("25"))), "25");
/// assert_eq!(display_value(None), "undefined");
/// ```
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(number_to_string)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
