//! Scalar values - raw cell contents and their resolved forms
//!
//! Cells arrive as loosely-typed scalars: numbers, text, datetimes or a null
//! marker. The same enum carries the value after type conversion.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use std::fmt;

/// A scalar cell value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null marker (missing value)
    #[default]
    None,
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Text
    String(String),
    /// Date/time, with or without a UTC offset
    DateTime(DateTimeValue),
}

impl Value {
    /// Check if this value is the null marker
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Try to get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float; integers widen
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as datetime
    pub fn as_datetime(&self) -> Option<&DateTimeValue> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// True for a float that is NaN or infinite
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::Float(f) if !f.is_finite())
    }

    /// Short name of the variant, for error messages
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::DateTime(_) => "datetime",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Int(i) => write!(f, "{i}"),
            // Debug keeps a fractional digit on integral floats ("1.0")
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => f.write_str(s),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::String(s) => serializer.serialize_str(s),
            Self::DateTime(dt) => serializer.collect_str(dt),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(DateTimeValue::Naive(value))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(DateTimeValue::Fixed(value))
    }
}

impl From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(DateTimeValue::Zoned(value))
    }
}

impl From<DateTimeValue> for Value {
    fn from(value: DateTimeValue) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// A date/time value
#[derive(Debug, Clone, PartialEq)]
pub enum DateTimeValue {
    /// Wall-clock time without offset
    Naive(NaiveDateTime),
    /// Time with a fixed UTC offset
    Fixed(DateTime<FixedOffset>),
    /// Time localized into a named zone
    Zoned(DateTime<Tz>),
}

impl DateTimeValue {
    /// Wall-clock time, ignoring any offset
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Naive(dt) => *dt,
            Self::Fixed(dt) => dt.naive_local(),
            Self::Zoned(dt) => dt.naive_local(),
        }
    }

    /// Calendar date
    pub fn date(&self) -> NaiveDate {
        self.naive_local().date()
    }

    /// Offset from UTC in seconds, if the value carries one
    pub fn utc_offset_seconds(&self) -> Option<i32> {
        match self {
            Self::Naive(_) => None,
            Self::Fixed(dt) => Some(dt.offset().local_minus_utc()),
            Self::Zoned(dt) => Some(dt.fixed_offset().offset().local_minus_utc()),
        }
    }

    /// Name of the zone for localized values
    pub fn timezone_name(&self) -> Option<&'static str> {
        match self {
            Self::Zoned(dt) => Some(dt.timezone().name()),
            _ => None,
        }
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.naive_local();
        if local.nanosecond() == 0 {
            write!(f, "{}", local.format("%Y-%m-%d %H:%M:%S"))?;
        } else {
            write!(f, "{}", local.format("%Y-%m-%d %H:%M:%S%.6f"))?;
        }

        match self {
            Self::Naive(_) => Ok(()),
            Self::Fixed(dt) => write!(f, "{}", dt.format("%:z")),
            Self::Zoned(dt) => write!(f, "{}", dt.format("%:z")),
        }
    }
}
