use once_cell::sync::Lazy;
use regex::Regex;

/// Category assigned to one input line. Classification is total: every line
/// maps to exactly one variant, with `Text` as the catch-all.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedValue {
    Integer(i64),
    Float(f32),
    Text(String),
}

// Lazy static regexes for performance
static DECIMAL_FRACTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?\d*\.\d+([eE][+-]?\d+)?$").unwrap()
});

static EXPONENT_FORM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?\d+[eE][+-]?\d+$").unwrap()
});

/// Classifies a single line, first match wins: float shape before integer
/// parse before the string fallback.
///
/// The float branch is gated on a shape check so that words `parse::<f32>`
/// would accept ("inf", "NaN") and bare integers stay out of it. A line that
/// looks numeric but overflows `i64` falls through to `Text`.
pub fn classify(line: &str) -> ClassifiedValue {
    if DECIMAL_FRACTION_REGEX.is_match(line) || EXPONENT_FORM_REGEX.is_match(line) {
        if let Ok(value) = line.parse::<f32>() {
            return ClassifiedValue::Float(value);
        }
    }

    if let Ok(value) = line.parse::<i64>() {
        return ClassifiedValue::Integer(value);
    }

    ClassifiedValue::Text(line.to_string())
}
