//! Format specifications for rendering cells

use dataprop_types::{Typecode, Value};
use serde::{Serialize, Serializer};
use std::fmt;

/// How a value is rendered as text.
///
/// Displays in the printf-style mini language downstream formatters expect:
/// `d`, `.2f`, `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatSpec {
    /// Whole number
    Integer,
    /// Fixed-point with the given fractional digits
    Fixed { decimal_places: usize },
    /// Value's canonical text
    Text,
}

impl FormatSpec {
    /// Format for values of `typecode`; a float without known decimal places
    /// renders with none.
    pub fn for_typecode(typecode: Typecode, decimal_places: Option<usize>) -> Self {
        match typecode {
            Typecode::Int => Self::Integer,
            Typecode::Float => Self::Fixed {
                decimal_places: decimal_places.unwrap_or(0),
            },
            Typecode::None | Typecode::String | Typecode::DateTime => Self::Text,
        }
    }

    pub fn render(&self, value: &Value) -> String {
        match (self, value) {
            (Self::Integer, Value::Int(n)) => n.to_string(),
            (Self::Integer, Value::Float(f)) => format!("{f:.0}"),
            (Self::Fixed { decimal_places }, Value::Int(n)) => {
                let dp = *decimal_places;
                format!("{:.dp$}", *n as f64)
            }
            (Self::Fixed { decimal_places }, Value::Float(f)) => {
                let dp = *decimal_places;
                format!("{f:.dp$}")
            }
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("d"),
            Self::Fixed { decimal_places } => write!(f, ".{decimal_places}f"),
            Self::Text => f.write_str("s"),
        }
    }
}

impl Serialize for FormatSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
