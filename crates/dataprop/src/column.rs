//! Per-column aggregation of data properties

use dataprop_types::{Align, Typecode, TypecodeSet};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

use crate::format::FormatSpec;
use crate::minmax::MinMax;
use crate::property::DataProperty;

/// Accumulates the cells of one column into a single type, alignment and
/// padding width.
///
/// Header cells only widen the padding; body cells also contribute their
/// typecode and digit metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDataProperty {
    typecodes: TypecodeSet,
    min_padding_len: usize,
    max_str_len: usize,
    minmax_integer_digits: MinMax<usize>,
    minmax_decimal_places: MinMax<usize>,
    minmax_additional_format_len: MinMax<usize>,
}

impl ColumnDataProperty {
    pub fn new(min_padding_len: usize) -> Self {
        Self {
            min_padding_len,
            ..Self::default()
        }
    }

    pub fn update_header(&mut self, header: &DataProperty) {
        self.max_str_len = self.max_str_len.max(header.str_len());
    }

    pub fn update_body(&mut self, cell: &DataProperty) {
        self.typecodes.insert(cell.typecode());
        self.max_str_len = self.max_str_len.max(cell.str_len());

        if cell.typecode().is_numeric() {
            if let Some(digits) = cell.integer_digits() {
                self.minmax_integer_digits.update(digits);
            }
            self.minmax_additional_format_len
                .update(cell.additional_format_len());
        }

        // integers carry no fractional part and stay out of the column's precision
        if let (Typecode::Float, Some(places)) = (cell.typecode(), cell.decimal_places()) {
            self.minmax_decimal_places.update(places);
        }
    }

    /// Reduced typecode of every body cell folded so far
    pub fn typecode(&self) -> Typecode {
        self.typecodes.reduce()
    }

    /// Typecodes of every body cell folded so far
    pub fn typecodes(&self) -> TypecodeSet {
        self.typecodes
    }

    pub fn align(&self) -> Align {
        Align::for_typecode(self.typecode())
    }

    pub fn padding_len(&self) -> usize {
        self.min_padding_len.max(self.max_str_len)
    }

    /// Fractional digits needed by the most precise float cell
    pub fn decimal_places(&self) -> Option<usize> {
        self.minmax_decimal_places.max_value()
    }

    pub fn minmax_integer_digits(&self) -> &MinMax<usize> {
        &self.minmax_integer_digits
    }

    pub fn minmax_decimal_places(&self) -> &MinMax<usize> {
        &self.minmax_decimal_places
    }

    pub fn minmax_additional_format_len(&self) -> &MinMax<usize> {
        &self.minmax_additional_format_len
    }

    pub fn format_spec(&self) -> FormatSpec {
        FormatSpec::for_typecode(self.typecode(), self.decimal_places())
    }

    /// Render `cell` with this column's format, padded to the column width
    pub fn render(&self, cell: &DataProperty) -> String {
        let text = self.format_spec().render(cell.data());
        self.align().pad(&text, self.padding_len())
    }
}

impl fmt::Display for ColumnDataProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "typename={}, align={}, padding_len={}, integer_digits={}, decimal_places={}, additional_format_len={}",
            self.typecode(),
            self.align(),
            self.padding_len(),
            self.minmax_integer_digits,
            self.minmax_decimal_places,
            self.minmax_additional_format_len,
        )
    }
}

impl Serialize for ColumnDataProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ColumnDataProperty", 8)?;
        state.serialize_field("typecode", &self.typecode())?;
        state.serialize_field("align", &self.align())?;
        state.serialize_field("padding_len", &self.padding_len())?;
        state.serialize_field("decimal_places", &self.decimal_places())?;
        state.serialize_field("format_spec", &self.format_spec())?;
        state.serialize_field("minmax_integer_digits", &self.minmax_integer_digits)?;
        state.serialize_field("minmax_decimal_places", &self.minmax_decimal_places)?;
        state.serialize_field(
            "minmax_additional_format_len",
            &self.minmax_additional_format_len,
        )?;
        state.end()
    }
}
