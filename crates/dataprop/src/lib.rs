//! Type inference and display metrics for tabular data
//!
//! This crate classifies loosely-typed cell values and derives what a table
//! renderer needs to lay them out:
//! - Per-cell type, alignment, string width and digit counts ([`DataProperty`])
//! - Per-column type, padding and precision ([`ColumnDataProperty`])
//! - Whole-matrix extraction ([`PropertyExtractor`])
//!
//! # Example
//!
//! ```
//! use dataprop::{PropertyConfig, PropertyExtractor, Value};
//!
//! let extractor = PropertyExtractor::new(PropertyConfig::default())
//!     .with_header_row(vec![Value::from("price")])
//!     .with_data_matrix(vec![
//!         vec![Value::from("1.5")],
//!         vec![Value::from(-22.25)],
//!     ]);
//!
//! let columns = extractor.extract_column_properties()?;
//! assert_eq!(columns[0].format_spec().to_string(), ".2f");
//! assert_eq!(columns[0].padding_len(), 6);
//! # Ok::<(), dataprop::DataPropertyError>(())
//! ```

// Re-export the component crates
pub use dataprop_convert as convert;
pub use dataprop_types as types;

pub mod column;
pub mod config;
pub mod digits;
pub mod error;
pub mod extractor;
pub mod format;
pub mod functions;
pub mod minmax;
pub mod property;

// Convenience re-exports
pub use column::ColumnDataProperty;
pub use config::PropertyConfig;
pub use dataprop_convert::TimezoneTable;
pub use dataprop_types::{Align, DateTimeValue, Typecode, TypecodeSet, Value};
pub use digits::number_of_digits;
pub use error::{DataPropertyError, Result};
pub use extractor::{PropertyExtractor, extract_column_properties, extract_data_property_matrix};
pub use format::FormatSpec;
pub use minmax::MinMax;
pub use property::DataProperty;
