//! Digit metrics for numeric cells

use dataprop_convert::{FloatConverter, IntegerConverter, ValueConverter};
use dataprop_types::Value;

/// Maximum decimal places shown for a magnitude below `10^pow`, as
/// `(pow, places)` in ascending order. Magnitudes of `10^3` and above get
/// [`DEFAULT_DECIMAL_PLACES`].
pub const DECIMAL_PLACE_THRESHOLDS: [(i32, usize); 6] =
    [(-2, 6), (-1, 5), (0, 4), (1, 3), (2, 2), (3, 1)];

pub const DEFAULT_DECIMAL_PLACES: usize = 1;

/// Count of digits left of the decimal point.
///
/// `None` for non-numeric and non-finite values.
pub fn integer_digits(value: &Value) -> Option<usize> {
    match value {
        Value::Int(n) => Some(decimal_width(n.unsigned_abs())),
        Value::Float(f) if f.is_finite() => {
            let abs = f.abs();
            if abs == 0.0 {
                return Some(1);
            }
            let digits = abs.log10().floor() as i64 + 1;
            Some(digits.max(1) as usize)
        }
        _ => None,
    }
}

/// Count of digits shown right of the decimal point.
///
/// Integers have none; floats show their own fractional digits, capped by
/// [`max_decimal_places`].
pub fn decimal_places(value: &Value) -> Option<usize> {
    match value {
        Value::Int(_) => Some(0),
        Value::Float(f) if f.is_finite() => {
            let abs = f.abs();
            Some(max_decimal_places(abs).min(fraction_digits(abs)))
        }
        _ => None,
    }
}

/// Width added by formatting beyond the digits: the minus sign
pub fn additional_format_len(value: &Value) -> usize {
    match value {
        Value::Int(n) if *n < 0 => 1,
        Value::Float(f) if *f < 0.0 => 1,
        _ => 0,
    }
}

/// Decimal places allowed for a magnitude of `abs`
pub fn max_decimal_places(abs: f64) -> usize {
    DECIMAL_PLACE_THRESHOLDS
        .iter()
        .find(|(pow, _)| abs < 10f64.powi(*pow))
        .map_or(DEFAULT_DECIMAL_PLACES, |(_, places)| *places)
}

/// Digits after the point in the shortest round-trip text of `f`.
///
/// Scientific notation is expanded: `1.5e-5` has 6, `1e16` has 0.
pub fn fraction_digits(f: f64) -> usize {
    let text = format!("{f:?}");
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().unwrap_or(0)),
        None => (text.as_str(), 0),
    };
    let fraction = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as i64);
    (fraction - exponent).max(0) as usize
}

/// Integer and decimal digit counts of a number or numeric text.
///
/// Anything else, including non-finite numbers, yields `(None, None)`.
pub fn number_of_digits(value: &Value) -> (Option<usize>, Option<usize>) {
    let number = match value {
        Value::Int(_) | Value::Float(_) => Some(value.clone()),
        Value::String(_) => IntegerConverter::default()
            .convert(value)
            .or_else(|_| FloatConverter::default().convert(value))
            .ok(),
        _ => None,
    };

    match number {
        Some(number) if !number.is_non_finite() => {
            (integer_digits(&number), decimal_places(&number))
        }
        _ => (None, None),
    }
}

fn decimal_width(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
