//! Running minimum/maximum tracking

use serde::Serialize;
use std::fmt;

/// Smallest and largest value seen so far; undefined until the first update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinMax<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Default for MinMax<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T: PartialOrd + Copy> MinMax<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, value: T) {
        if self.min.is_none_or(|min| value < min) {
            self.min = Some(value);
        }
        if self.max.is_none_or(|max| value > max) {
            self.max = Some(value);
        }
    }

    pub fn min_value(&self) -> Option<T> {
        self.min
    }

    pub fn max_value(&self) -> Option<T> {
        self.max
    }

    pub fn is_defined(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

impl<T: fmt::Display> fmt::Display for MinMax<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(min={}, max={})", OrNan(&self.min), OrNan(&self.max))
    }
}

/// Displays `Some(x)` as `x` and `None` as `nan`
pub(crate) struct OrNan<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNan<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("nan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined() {
        let minmax = MinMax::<usize>::new();
        assert!(!minmax.is_defined());
        assert_eq!(minmax.min_value(), None);
        assert_eq!(minmax.to_string(), "(min=nan, max=nan)");
    }

    #[test]
    fn test_update() {
        let mut minmax = MinMax::new();
        for value in [3, 1, 2, 5, 4] {
            minmax.update(value);
        }
        assert!(minmax.is_defined());
        assert_eq!(minmax.min_value(), Some(1));
        assert_eq!(minmax.max_value(), Some(5));
        assert_eq!(minmax.to_string(), "(min=1, max=5)");
    }

    #[test]
    fn test_single_update() {
        let mut minmax = MinMax::new();
        minmax.update(7usize);
        assert_eq!((minmax.min_value(), minmax.max_value()), (Some(7), Some(7)));
    }

    #[test]
    fn test_serialize() {
        let mut minmax = MinMax::new();
        minmax.update(2usize);
        assert_eq!(serde_json::to_string(&minmax).unwrap(), r#"{"min":2,"max":2}"#);
        assert_eq!(
            serde_json::to_string(&MinMax::<usize>::new()).unwrap(),
            r#"{"min":null,"max":null}"#
        );
    }
}
