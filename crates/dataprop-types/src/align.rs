//! Display alignment

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Typecode;

/// Horizontal alignment of a cell or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    /// Alignment used to display values of `typecode`.
    ///
    /// Numbers align right; everything else, including null-like values,
    /// aligns left.
    pub const fn for_typecode(typecode: Typecode) -> Self {
        match typecode {
            Typecode::Int | Typecode::Float => Self::Right,
            Typecode::None | Typecode::String | Typecode::DateTime => Self::Left,
        }
    }

    /// Numeric code
    pub const fn align_code(&self) -> u8 {
        match self {
            Self::Left => 1 << 0,
            Self::Right => 1 << 1,
            Self::Center => 1 << 2,
        }
    }

    /// Canonical name
    pub const fn align_string(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    /// Pad `text` to `width` characters according to this alignment
    pub fn pad(&self, text: &str, width: usize) -> String {
        match self {
            Self::Left => format!("{text:<width$}"),
            Self::Right => format!("{text:>width$}"),
            Self::Center => format!("{text:^width$}"),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.align_string())
    }
}
