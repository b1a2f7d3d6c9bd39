//! Whole-matrix property extraction

use dataprop_types::Value;

use crate::column::ColumnDataProperty;
use crate::config::PropertyConfig;
use crate::error::{DataPropertyError, Result};
use crate::property::DataProperty;

/// Holds a header row, a data matrix and a configuration, and extracts
/// per-cell or per-column properties from them.
#[derive(Debug, Clone, Default)]
pub struct PropertyExtractor {
    header_row: Option<Vec<Value>>,
    data_matrix: Option<Vec<Vec<Value>>>,
    config: PropertyConfig,
}

impl PropertyExtractor {
    pub fn new(config: PropertyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_header_row(mut self, header_row: Vec<Value>) -> Self {
        self.header_row = Some(header_row);
        self
    }

    pub fn with_data_matrix(mut self, data_matrix: Vec<Vec<Value>>) -> Self {
        self.data_matrix = Some(data_matrix);
        self
    }

    pub fn set_header_row(&mut self, header_row: Option<Vec<Value>>) {
        self.header_row = header_row;
    }

    pub fn set_data_matrix(&mut self, data_matrix: Option<Vec<Vec<Value>>>) {
        self.data_matrix = data_matrix;
    }

    pub fn header_row(&self) -> Option<&[Value]> {
        self.header_row.as_deref()
    }

    pub fn data_matrix(&self) -> Option<&[Vec<Value>]> {
        self.data_matrix.as_deref()
    }

    pub fn config(&self) -> &PropertyConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PropertyConfig {
        &mut self.config
    }

    /// Properties of every body cell, row by row
    ///
    /// # Errors
    ///
    /// [`DataPropertyError::InvalidMatrix`] if no data matrix is set, or
    /// the first cell's [`DataPropertyError::Overflow`].
    pub fn extract_data_property_matrix(&self) -> Result<Vec<Vec<DataProperty>>> {
        extract_data_property_matrix(self.require_matrix()?, &self.config)
    }

    /// Properties of every column, folding the header row first
    ///
    /// # Errors
    ///
    /// Same as [`PropertyExtractor::extract_data_property_matrix`].
    pub fn extract_column_properties(&self) -> Result<Vec<ColumnDataProperty>> {
        extract_column_properties(self.require_matrix()?, self.header_row(), &self.config)
    }

    fn require_matrix(&self) -> Result<&[Vec<Value>]> {
        self.data_matrix()
            .ok_or_else(|| DataPropertyError::invalid_matrix("data matrix is not set"))
    }
}

/// Properties of every cell in `matrix`
pub fn extract_data_property_matrix(
    matrix: &[Vec<Value>],
    config: &PropertyConfig,
) -> Result<Vec<Vec<DataProperty>>> {
    log::debug!("extracting data properties from {} rows", matrix.len());

    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| DataProperty::new(value.clone(), config))
                .collect()
        })
        .collect()
}

/// Properties of every column in `matrix`.
///
/// There is one column per index up to the widest row. Header cells are
/// measured without conversion; surplus header cells are ignored and an
/// empty header is the same as none.
pub fn extract_column_properties(
    matrix: &[Vec<Value>],
    header: Option<&[Value]>,
    config: &PropertyConfig,
) -> Result<Vec<ColumnDataProperty>> {
    let column_count = matrix.iter().map(Vec::len).max().unwrap_or(0);
    log::debug!(
        "extracting column properties from {} rows, {} columns",
        matrix.len(),
        column_count
    );

    let mut columns = vec![ColumnDataProperty::new(config.min_padding_len); column_count];

    if let Some(header) = header.filter(|header| !header.is_empty()) {
        for (column, value) in columns.iter_mut().zip(header) {
            column.update_header(&DataProperty::new_header(value.clone(), config)?);
        }
    }

    for row in matrix {
        for (column, value) in columns.iter_mut().zip(row) {
            column.update_body(&DataProperty::new(value.clone(), config)?);
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_matrix() {
        let extractor = PropertyExtractor::default();
        assert!(matches!(
            extractor.extract_data_property_matrix(),
            Err(DataPropertyError::InvalidMatrix { .. })
        ));
        assert!(matches!(
            extractor.extract_column_properties(),
            Err(DataPropertyError::InvalidMatrix { .. })
        ));
    }

    #[test]
    fn test_setters() {
        let mut extractor = PropertyExtractor::new(PropertyConfig::default());
        extractor.set_data_matrix(Some(vec![vec![Value::Int(1)]]));
        extractor.set_header_row(Some(vec![Value::string("n")]));
        assert_eq!(extractor.data_matrix().map(<[_]>::len), Some(1));
        assert_eq!(extractor.header_row(), Some(&[Value::string("n")][..]));

        extractor.set_data_matrix(None);
        assert!(extractor.extract_column_properties().is_err());
    }
}
