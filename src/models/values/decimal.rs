//! Scaled-integer decimal values
//!
//! Decimals are represented exactly as a 128-bit integer plus a decimal scale,
//! the same shape storage engines use for fixed-point columns. `12.50` is
//! `{ units: 1250, scale: 2 }`. This crate only constructs, parses, and
//! formats decimals; arithmetic belongs to the layers that own it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConversionError;

/// Maximum supported number of fractional digits.
pub const MAX_DECIMAL_SCALE: u8 = 38;

/// An exact decimal value: `units * 10^(-scale)`.
///
/// Two decimals are equal only when both units and scale are equal, so
/// `1.5` and `1.50` are distinct values. Parsing and display round-trip
/// losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
    units: i128,
    scale: u8,
}

impl Decimal {
    /// Build a decimal from raw units and scale.
    pub fn new(units: i128, scale: u8) -> Self {
        Decimal { units, scale }
    }

    /// The scaled integer component.
    pub fn units(&self) -> i128 {
        self.units
    }

    /// The number of fractional digits.
    pub fn scale(&self) -> u8 {
        self.scale
    }
}

impl FromStr for Decimal {
    type Err = ConversionError;

    /// Parse a decimal literal, consuming the entire input.
    ///
    /// Accepts an optional sign, an integer part, and an optional fractional
    /// part: `-12.50`, `+3`, `0.001`. Whitespace, exponents, a bare `.`, and
    /// any trailing characters are rejected. Values that overflow 128 bits or
    /// exceed [`MAX_DECIMAL_SCALE`] fractional digits are rejected as well.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (integer_part, fractional_part) = match unsigned.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (unsigned, ""),
        };

        if integer_part.is_empty() || !integer_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConversionError);
        }
        if unsigned.contains('.')
            && (fractional_part.is_empty()
                || !fractional_part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ConversionError);
        }
        if fractional_part.len() > MAX_DECIMAL_SCALE as usize {
            return Err(ConversionError);
        }

        let mut units: i128 = 0;
        for digit in integer_part.bytes().chain(fractional_part.bytes()) {
            units = units
                .checked_mul(10)
                .and_then(|n| n.checked_add(i128::from(digit - b'0')))
                .ok_or(ConversionError)?;
        }
        if negative {
            units = -units;
        }

        Ok(Decimal::new(units, fractional_part.len() as u8))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.units);
        }

        let sign = if self.units < 0 { "-" } else { "" };
        let divisor = 10_i128.pow(u32::from(self.scale));
        let integer = (self.units / divisor).unsigned_abs();
        let fraction = (self.units % divisor).unsigned_abs();
        write!(f, "{sign}{integer}.{fraction:0width$}", width = self.scale as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!("10".parse::<Decimal>().unwrap(), Decimal::new(10, 0));
        assert_eq!("+7".parse::<Decimal>().unwrap(), Decimal::new(7, 0));
        assert_eq!("-3".parse::<Decimal>().unwrap(), Decimal::new(-3, 0));
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!("200.75".parse::<Decimal>().unwrap(), Decimal::new(20075, 2));
        assert_eq!("-0.05".parse::<Decimal>().unwrap(), Decimal::new(-5, 2));
        assert_eq!("0.001".parse::<Decimal>().unwrap(), Decimal::new(1, 3));
    }

    #[test]
    fn test_parse_rejects_partial_and_malformed_input() {
        for bad in ["", ".", "1.", ".5", "1.2.3", "1e5", " 1", "1 ", "12a", "--1"] {
            assert!(bad.parse::<Decimal>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let too_big = "9".repeat(40);
        assert!(too_big.parse::<Decimal>().is_err());

        let too_precise = format!("1.{}", "9".repeat(39));
        assert!(too_precise.parse::<Decimal>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Decimal::new(20075, 2).to_string(), "200.75");
        assert_eq!(Decimal::new(-5, 2).to_string(), "-0.05");
        assert_eq!(Decimal::new(42, 0).to_string(), "42");
        assert_eq!(Decimal::new(1, 3).to_string(), "0.001");
    }

    #[test]
    fn test_display_parse_round_trip() {
        for text in ["200.75", "-0.05", "42", "0.001", "1.50"] {
            let parsed = text.parse::<Decimal>().unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn test_scale_preserved_in_equality() {
        assert_ne!(
            "1.5".parse::<Decimal>().unwrap(),
            "1.50".parse::<Decimal>().unwrap()
        );
    }
}
