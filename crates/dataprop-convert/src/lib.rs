//! Type checking, conversion and classification of raw cell values
//!
//! - **Converters**: [`IntegerConverter`], [`FloatConverter`] and
//!   [`DateTimeConverter`] test and convert a value to one target type.
//! - **Classifier**: [`ValueClassifier`] applies the converters in precedence
//!   order to pick one typecode per value.
//! - **Timezones**: [`TimezoneTable`] maps fixed UTC offsets to named zones
//!   for parsed datetimes.
//!
//! # Example
//!
//! ```
//! use dataprop_convert::{TimezoneTable, ValueClassifier};
//! use dataprop_types::{Typecode, Value};
//!
//! let none = Value::None;
//! let zones = TimezoneTable::default();
//! let classifier = ValueClassifier::new(true, &none, &zones);
//!
//! let (value, typecode) = classifier.classify(&Value::string("1.5")).unwrap();
//! assert_eq!(value, Value::Float(1.5));
//! assert_eq!(typecode, Typecode::Float);
//! ```

pub mod classifier;
pub mod converter;
pub mod datetime;
pub mod error;
pub mod timezone;

pub use classifier::{ValueClassifier, native_typecode};
pub use converter::{DateTimeConverter, FloatConverter, IntegerConverter, ValueConverter};
pub use datetime::{ParsedDateTime, parse_datetime};
pub use error::{ConversionError, ConvertResult};
pub use timezone::TimezoneTable;
