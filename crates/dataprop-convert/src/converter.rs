//! Type checkers and converters
//!
//! Each converter answers two questions about a value: can it be read as the
//! target type (`is_type`), and if so, what is the converted value
//! (`convert`). With `attempt_conversion` disabled a converter returns the
//! value unchanged and performs no parsing.

use dataprop_types::{DateTimeValue, Typecode, Value};

use crate::datetime::{ParsedDateTime, parse_datetime};
use crate::error::{ConversionError, ConvertResult};
use crate::timezone::TimezoneTable;

/// A checker/converter for one target typecode
pub trait ValueConverter {
    /// Typecode produced on success
    fn target(&self) -> Typecode;

    /// Convert `value` to the target type
    fn convert(&self, value: &Value) -> ConvertResult<Value>;

    /// Check whether `value` converts without error
    fn is_type(&self, value: &Value) -> bool {
        self.convert(value).is_ok()
    }
}

/// Integer checker/converter
#[derive(Debug, Clone, Copy)]
pub struct IntegerConverter {
    attempt_conversion: bool,
}

impl IntegerConverter {
    pub fn new(attempt_conversion: bool) -> Self {
        Self { attempt_conversion }
    }
}

impl Default for IntegerConverter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ValueConverter for IntegerConverter {
    fn target(&self) -> Typecode {
        Typecode::Int
    }

    fn convert(&self, value: &Value) -> ConvertResult<Value> {
        if !self.attempt_conversion {
            return Ok(value.clone());
        }

        match value {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(f) if !f.is_finite() => Err(ConversionError::non_finite(value)),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ConversionError::unconvertible(value, Typecode::Int)),
            _ => Err(ConversionError::unconvertible(value, Typecode::Int)),
        }
    }
}

/// Float checker/converter
#[derive(Debug, Clone, Copy)]
pub struct FloatConverter {
    attempt_conversion: bool,
}

impl FloatConverter {
    pub fn new(attempt_conversion: bool) -> Self {
        Self { attempt_conversion }
    }
}

impl Default for FloatConverter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ValueConverter for FloatConverter {
    fn target(&self) -> Typecode {
        Typecode::Float
    }

    fn convert(&self, value: &Value) -> ConvertResult<Value> {
        if !self.attempt_conversion {
            return Ok(value.clone());
        }

        match value {
            Value::Float(f) => Ok(Value::Float(*f)),
            Value::Int(i) => Ok(Value::Float(*i as f64)),
            // digits beyond i64 would lose precision as f64; leave them as text
            Value::String(s) if is_oversized_integer_text(s) => {
                Err(ConversionError::unconvertible(value, Typecode::Float))
            }
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ConversionError::unconvertible(value, Typecode::Float)),
            _ => Err(ConversionError::unconvertible(value, Typecode::Float)),
        }
    }
}

/// Integer-shaped text (optional sign, ASCII digits) outside the `i64` range
fn is_oversized_integer_text(text: &str) -> bool {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) && text.parse::<i64>().is_err()
}

/// Datetime checker/converter
///
/// Offsets found in the timezone table are re-localized into the named zone.
#[derive(Debug, Clone)]
pub struct DateTimeConverter<'a> {
    attempt_conversion: bool,
    timezones: &'a TimezoneTable,
}

impl<'a> DateTimeConverter<'a> {
    pub fn new(attempt_conversion: bool, timezones: &'a TimezoneTable) -> Self {
        Self {
            attempt_conversion,
            timezones,
        }
    }
}

impl ValueConverter for DateTimeConverter<'_> {
    fn target(&self) -> Typecode {
        Typecode::DateTime
    }

    fn convert(&self, value: &Value) -> ConvertResult<Value> {
        // Datetimes are accepted even when conversion is disabled
        if let Value::DateTime(dt) = value {
            return Ok(Value::DateTime(dt.clone()));
        }
        if !self.attempt_conversion {
            return Ok(value.clone());
        }

        let Value::String(s) = value else {
            return Err(ConversionError::unconvertible(value, Typecode::DateTime));
        };

        match parse_datetime(s) {
            Some(ParsedDateTime::Naive(dt)) => Ok(Value::DateTime(DateTimeValue::Naive(dt))),
            Some(ParsedDateTime::Fixed(dt)) => Ok(Value::DateTime(self.timezones.localize(dt))),
            None => Err(ConversionError::unconvertible(value, Typecode::DateTime)),
        }
    }
}
