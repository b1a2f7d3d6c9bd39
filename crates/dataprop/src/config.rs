//! Extraction configuration

use dataprop_convert::{TimezoneTable, ValueClassifier};
use dataprop_types::Value;
use serde::Deserialize;

/// Options shared by every cell and column of an extraction
///
/// The scalar options can be loaded with serde; `none_value` and `timezones`
/// are set programmatically.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertyConfig {
    /// Parse text into numbers and datetimes (default: true)
    pub attempt_conversion: bool,
    /// What a null cell resolves to (default: `Value::None`)
    #[serde(skip)]
    pub none_value: Value,
    /// Expand tabs in text cells (default: true)
    pub replace_tabs_with_spaces: bool,
    /// Spaces per tab; 0 disables expansion (default: 2)
    pub tab_length: usize,
    /// Lower bound for column padding (default: 0)
    pub min_padding_len: usize,
    /// Offsets re-localized into named zones
    #[serde(skip)]
    pub timezones: TimezoneTable,
}

impl Default for PropertyConfig {
    fn default() -> Self {
        Self {
            attempt_conversion: true,
            none_value: Value::None,
            replace_tabs_with_spaces: true,
            tab_length: 2,
            min_padding_len: 0,
            timezones: TimezoneTable::default(),
        }
    }
}

impl PropertyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attempt_conversion(mut self, attempt_conversion: bool) -> Self {
        self.attempt_conversion = attempt_conversion;
        self
    }

    pub fn with_none_value(mut self, none_value: impl Into<Value>) -> Self {
        self.none_value = none_value.into();
        self
    }

    /// Enable tab expansion with `tab_length` spaces per tab
    pub fn with_tab_expansion(mut self, tab_length: usize) -> Self {
        self.replace_tabs_with_spaces = true;
        self.tab_length = tab_length;
        self
    }

    pub fn without_tab_expansion(mut self) -> Self {
        self.replace_tabs_with_spaces = false;
        self
    }

    pub fn with_min_padding_len(mut self, min_padding_len: usize) -> Self {
        self.min_padding_len = min_padding_len;
        self
    }

    pub fn with_timezones(mut self, timezones: TimezoneTable) -> Self {
        self.timezones = timezones;
        self
    }

    /// Tab replacement to apply to text cells, if any
    pub fn tab_replacement(&self) -> Option<String> {
        (self.replace_tabs_with_spaces && self.tab_length > 0).then(|| " ".repeat(self.tab_length))
    }

    /// Classifier for this configuration
    pub fn classifier(&self) -> ValueClassifier<'_> {
        ValueClassifier::new(self.attempt_conversion, &self.none_value, &self.timezones)
    }
}
