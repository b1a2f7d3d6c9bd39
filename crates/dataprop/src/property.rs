//! Per-cell data properties

use dataprop_convert::ValueClassifier;
use dataprop_types::{Align, Typecode, Value};
use serde::Serialize;
use std::fmt;

use crate::config::PropertyConfig;
use crate::digits;
use crate::error::{DataPropertyError, Result};
use crate::format::FormatSpec;
use crate::minmax::OrNan;

/// Resolved value, typecode and display metrics of one cell.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataProperty {
    #[serde(skip)]
    raw: Value,
    data: Value,
    typecode: Typecode,
    align: Align,
    str_len: usize,
    integer_digits: Option<usize>,
    decimal_places: Option<usize>,
    additional_format_len: usize,
    format_spec: FormatSpec,
}

impl DataProperty {
    /// Classify `value` and measure it.
    ///
    /// # Errors
    ///
    /// [`DataPropertyError::Overflow`] if the value is, or parses to, a
    /// non-finite number.
    pub fn new(value: impl Into<Value>, config: &PropertyConfig) -> Result<Self> {
        Self::with_classifier(value.into(), &config.classifier(), config)
    }

    /// Like [`DataProperty::new`] but without type conversion, so text is
    /// measured as written. Used for header cells.
    pub fn new_header(value: impl Into<Value>, config: &PropertyConfig) -> Result<Self> {
        let classifier = ValueClassifier::new(false, &config.none_value, &config.timezones);
        Self::with_classifier(value.into(), &classifier, config)
    }

    fn with_classifier(raw: Value, classifier: &ValueClassifier<'_>, config: &PropertyConfig) -> Result<Self> {
        let (data, typecode) = classifier.classify(&raw).map_err(|err| {
            log::warn!("cannot measure {raw:?}: {err}");
            DataPropertyError::from(err)
        })?;

        let data = match (typecode, data, config.tab_replacement()) {
            (Typecode::String, Value::String(text), Some(spaces)) if text.contains('\t') => {
                Value::String(text.replace('\t', &spaces))
            }
            (_, data, _) => data,
        };

        let (integer_digits, decimal_places, additional_format_len) = if typecode.is_numeric() {
            (
                digits::integer_digits(&data),
                digits::decimal_places(&data),
                digits::additional_format_len(&data),
            )
        } else {
            (None, None, 0)
        };

        let format_spec = FormatSpec::for_typecode(typecode, decimal_places);
        let str_len = format_spec.render(&data).chars().count();

        Ok(Self {
            raw,
            data,
            typecode,
            align: Align::for_typecode(typecode),
            str_len,
            integer_digits,
            decimal_places,
            additional_format_len,
            format_spec,
        })
    }

    /// The value as it was supplied
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The value after conversion and tab expansion
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn typecode(&self) -> Typecode {
        self.typecode
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Character width of [`DataProperty::formatted`]
    pub fn str_len(&self) -> usize {
        self.str_len
    }

    pub fn integer_digits(&self) -> Option<usize> {
        self.integer_digits
    }

    pub fn decimal_places(&self) -> Option<usize> {
        self.decimal_places
    }

    /// Width added by the sign of a negative number
    pub fn additional_format_len(&self) -> usize {
        self.additional_format_len
    }

    pub fn format_spec(&self) -> FormatSpec {
        self.format_spec
    }

    /// The data rendered with this cell's own format
    pub fn formatted(&self) -> String {
        self.format_spec.render(&self.data)
    }
}

impl fmt::Display for DataProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data={}, typename={}, align={}, str_len={}, integer_digits={}, decimal_places={}, additional_format_len={}",
            self.formatted(),
            self.typecode,
            self.align,
            self.str_len,
            OrNan(&self.integer_digits),
            OrNan(&self.decimal_places),
            self.additional_format_len,
        )
    }
}
