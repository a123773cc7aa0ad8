//! Price Value Object
//!
//! Prices arrive as JSON numbers (`f64`) and are stored as `NUMERIC(11,2)`.
//!
//! ## Precision rule
//! The number is rendered with Rust's `Display` for `f64`, which yields the
//! shortest string that round-trips and never switches to exponent
//! notation. At most two digits may follow the `.` in that string, so
//! `10.00` (rendered `10`) passes and `10.005` fails. Values such as
//! `0.1 + 0.2` (rendered `0.30000000000000004`) fail as well.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::value_object::AdvertisementError;

/// Highest accepted price
pub const MAX_PRICE: f64 = 100_000_000.0;

/// Digits allowed after the decimal point
pub const MAX_PRICE_PRECISION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: f64) -> Result<Self, AdvertisementError> {
        if value.is_nan() || value < 0.0 {
            return Err(AdvertisementError::PriceLessZero);
        }
        if value > MAX_PRICE {
            return Err(AdvertisementError::BigPrice);
        }

        // -0.0 renders as "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        let canonical = value.to_string();

        let fraction_digits = canonical
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.len());
        if fraction_digits > MAX_PRICE_PRECISION {
            return Err(AdvertisementError::BigPricePrecision);
        }

        Decimal::from_str(&canonical)
            .map(Self)
            .map_err(|_| AdvertisementError::BigPricePrecision)
    }

    /// Rebuild from a stored value
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision() {
        assert!(Price::new(10.0).is_ok());
        assert!(Price::new(10.00).is_ok());
        assert!(Price::new(10.5).is_ok());
        assert!(Price::new(10.55).is_ok());
        assert_eq!(Price::new(10.005), Err(AdvertisementError::BigPricePrecision));
        assert_eq!(Price::new(5.999), Err(AdvertisementError::BigPricePrecision));
        assert_eq!(
            Price::new(0.1 + 0.2),
            Err(AdvertisementError::BigPricePrecision)
        );
    }

    #[test]
    fn test_range() {
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(MAX_PRICE).is_ok());
        assert_eq!(Price::new(-0.01), Err(AdvertisementError::PriceLessZero));
        assert_eq!(Price::new(100_000_001.0), Err(AdvertisementError::BigPrice));
        assert_eq!(Price::new(100_000_000.01), Err(AdvertisementError::BigPrice));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(Price::new(f64::NAN), Err(AdvertisementError::PriceLessZero));
        assert_eq!(Price::new(f64::INFINITY), Err(AdvertisementError::BigPrice));
        assert_eq!(
            Price::new(f64::NEG_INFINITY),
            Err(AdvertisementError::PriceLessZero)
        );
    }

    #[test]
    fn test_small_values_never_use_exponent() {
        assert_eq!(0.01f64.to_string(), "0.01");
        assert!(Price::new(0.01).is_ok());
        assert_eq!(Price::new(0.001), Err(AdvertisementError::BigPricePrecision));
        assert_eq!(Price::new(1e-7), Err(AdvertisementError::BigPricePrecision));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let price = Price::new(-0.0).unwrap();
        assert_eq!(price.as_decimal(), Decimal::ZERO);
        assert_eq!(price.to_string(), "0");
    }

    #[test]
    fn test_decimal_is_exact() {
        let price = Price::new(1234.56).unwrap();
        assert_eq!(price.as_decimal(), Decimal::new(123456, 2));
        assert_eq!(price.to_f64(), 1234.56);
    }
}
