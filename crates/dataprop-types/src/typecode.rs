//! Typecodes and typecode sets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred semantic type of a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Typecode {
    /// Null-like value
    None,
    /// Integer number
    Int,
    /// Real number
    Float,
    /// Text, and the fallback for anything that failed every converter
    String,
    /// Date/time value
    DateTime,
}

impl Typecode {
    /// All typecodes, in bit order
    pub const ALL: [Typecode; 5] = [
        Self::None,
        Self::Int,
        Self::Float,
        Self::String,
        Self::DateTime,
    ];

    /// Get the type name used in summaries
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::DateTime => "DATETIME",
        }
    }

    /// Bit used to record this typecode in a [`TypecodeSet`]
    pub const fn bit(&self) -> u8 {
        match self {
            Self::None => 1 << 0,
            Self::Int => 1 << 1,
            Self::Float => 1 << 2,
            Self::String => 1 << 3,
            Self::DateTime => 1 << 4,
        }
    }

    /// Check if this typecode is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for Typecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of typecodes observed in a column
///
/// Records every typecode inserted; [`TypecodeSet::reduce`] collapses the set
/// into the single typecode used to display the column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypecodeSet(u8);

impl TypecodeSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a typecode
    pub fn insert(&mut self, typecode: Typecode) {
        self.0 |= typecode.bit();
    }

    /// Check membership
    pub const fn contains(&self, typecode: Typecode) -> bool {
        self.0 & typecode.bit() != 0
    }

    /// True when nothing has been inserted
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the members in bit order
    pub fn iter(&self) -> impl Iterator<Item = Typecode> + '_ {
        Typecode::ALL.into_iter().filter(|t| self.contains(*t))
    }

    /// Reduce the set to a single display typecode.
    ///
    /// `NONE` never influences the result. `STRING` wins over everything,
    /// `INT` alone stays `INT`, any `FLOAT` (with or without `INT`) is `FLOAT`,
    /// `DATETIME` alone stays `DATETIME`. Every other mix, including the
    /// empty and all-`NONE` sets, is `STRING`.
    pub const fn reduce(&self) -> Typecode {
        let int = self.contains(Typecode::Int);
        let float = self.contains(Typecode::Float);
        let string = self.contains(Typecode::String);
        let datetime = self.contains(Typecode::DateTime);

        match (int, float, string, datetime) {
            (_, _, true, _) => Typecode::String,
            (true, false, false, false) => Typecode::Int,
            (_, true, false, false) => Typecode::Float,
            (false, false, false, true) => Typecode::DateTime,
            _ => Typecode::String,
        }
    }
}

impl FromIterator<Typecode> for TypecodeSet {
    fn from_iter<I: IntoIterator<Item = Typecode>>(iter: I) -> Self {
        let mut set = Self::new();
        for typecode in iter {
            set.insert(typecode);
        }
        set
    }
}

impl Extend<Typecode> for TypecodeSet {
    fn extend<I: IntoIterator<Item = Typecode>>(&mut self, iter: I) {
        for typecode in iter {
            self.insert(typecode);
        }
    }
}
