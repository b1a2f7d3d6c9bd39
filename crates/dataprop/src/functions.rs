//! Helpers over loosely-typed values

use dataprop_convert::{FloatConverter, IntegerConverter, ValueConverter};
use dataprop_types::Value;

/// True if `text` is a hexadecimal number, with or without a `0x` prefix
pub fn is_hex(text: &str) -> bool {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// True for `None` and for text that is empty or only whitespace
pub fn is_empty_string(value: &Value) -> bool {
    match value {
        Value::None => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// True for text with at least one non-whitespace character
pub fn is_not_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(text) if !text.trim().is_empty())
}

/// Character count of the value's text; `None` for the null marker
pub fn text_len(value: &Value) -> Option<usize> {
    match value {
        Value::None => None,
        Value::String(text) => Some(text.chars().count()),
        other => Some(other.to_string().chars().count()),
    }
}

/// Resolve `value` to a number where possible.
///
/// The null marker becomes `none_value`, integer-like values become `Int`,
/// float-like values become `Float`; anything else is returned unchanged.
pub fn convert_value(value: &Value, none_value: &Value) -> Value {
    if value.is_none() {
        return none_value.clone();
    }

    IntegerConverter::default()
        .convert(value)
        .or_else(|_| FloatConverter::default().convert(value))
        .unwrap_or_else(|_| value.clone())
}
