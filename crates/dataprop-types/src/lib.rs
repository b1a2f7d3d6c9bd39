//! dataprop type system
//!
//! This crate defines the vocabulary shared by the other dataprop crates:
//! - Typecodes (NONE, INT, FLOAT, STRING, DATETIME) and typecode sets
//! - Display alignments
//! - Scalar values, raw and resolved

pub mod align;
pub mod typecode;
pub mod value;

pub use align::Align;
pub use typecode::{Typecode, TypecodeSet};
pub use value::{DateTimeValue, Value};
