use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed-point price with 2 decimal places, stored as a scaled integer.
///
/// Prices are never negative; [`Price::from_str`] rejects negative input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(i64);

impl Price {
    const SCALE: i64 = 100;

    pub const ZERO: Price = Price(0);

    pub fn from_float(value: f64) -> Self {
        Price((value * Self::SCALE as f64).round() as i64)
    }

    /// Construct from an already-scaled integer (cents).
    pub fn from_scaled(value: i64) -> Self {
        Price(value)
    }
}

/// Errors that can occur when parsing a price from user input
#[derive(Debug, Error, PartialEq)]
pub enum ParsePriceError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("price cannot be negative: {0}")]
    Negative(f64),
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ParsePriceError::NotANumber(s.to_string()))?;
        if !value.is_finite() {
            return Err(ParsePriceError::NotANumber(s.to_string()));
        }
        if value < 0.0 {
            return Err(ParsePriceError::Negative(value));
        }
        Ok(Price::from_float(value))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{whole}.{frac:02}")
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scaled_preserves_value() {
        let price = Price::from_scaled(12345);
        assert_eq!(price, Price(12345));
    }

    #[test]
    fn from_float_converts_correctly() {
        assert_eq!(Price::from_float(150.0), Price::from_scaled(15_000));
        assert_eq!(Price::from_float(1.5), Price::from_scaled(150));
        assert_eq!(Price::from_float(0.01), Price::from_scaled(1));
    }

    #[test]
    fn from_float_rounds_correctly() {
        assert_eq!(Price::from_float(1.234), Price::from_scaled(123));
        assert_eq!(Price::from_float(1.235), Price::from_scaled(124));
    }

    #[test]
    fn parse_accepts_decimals() {
        assert_eq!("150".parse(), Ok(Price::from_scaled(15_000)));
        assert_eq!("19.99".parse(), Ok(Price::from_scaled(1_999)));
        assert_eq!(" 7.5 ".parse(), Ok(Price::from_scaled(750)));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let err = "abc".parse::<Price>().unwrap_err();
        assert_eq!(err, ParsePriceError::NotANumber("abc".to_string()));
    }

    #[test]
    fn parse_rejects_negative() {
        let err = "-5".parse::<Price>().unwrap_err();
        assert_eq!(err, ParsePriceError::Negative(-5.0));
    }

    #[test]
    fn parse_rejects_nan_and_infinity() {
        assert!("NaN".parse::<Price>().is_err());
        assert!("inf".parse::<Price>().is_err());
    }

    #[test]
    fn display_formats_two_places() {
        assert_eq!(Price::from_scaled(15_000).to_string(), "150.00");
        assert_eq!(Price::from_scaled(150).to_string(), "1.50");
        assert_eq!(Price::from_scaled(1).to_string(), "0.01");
        assert_eq!(Price::from_scaled(0).to_string(), "0.00");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Price::default(), Price::ZERO);
    }

    #[test]
    fn add() {
        let a = Price::from_scaled(100);
        let b = Price::from_scaled(50);
        assert_eq!(a + b, Price::from_scaled(150));
    }

    #[test]
    fn add_assign() {
        let mut a = Price::from_scaled(100);
        a += Price::from_scaled(50);
        assert_eq!(a, Price::from_scaled(150));
    }

    #[test]
    fn sum_over_iterator() {
        let total: Price = [10, 20, 30].map(Price::from_scaled).into_iter().sum();
        assert_eq!(total, Price::from_scaled(60));
    }

    #[test]
    fn ordering() {
        assert!(Price::from_scaled(100) < Price::from_scaled(200));
        assert!(Price::ZERO < Price::from_scaled(1));
    }
}
