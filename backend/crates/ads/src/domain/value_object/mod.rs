//! Value Object Module

pub mod description;
pub mod image_url;
pub mod price;
pub mod title;

use thiserror::Error;

use description::Description;
use image_url::ImageUrl;
use price::Price;
use title::Title;

/// Advertisement validation failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvertisementError {
    #[error("title must contain at least 3 characters")]
    ShortTitle,
    #[error("title must contain at most 50 characters")]
    LongTitle,
    #[error("title may contain only letters and digits")]
    WrongTitleSymbols,
    #[error("description must not be empty")]
    ShortDescription,
    #[error("description must contain at most 500 characters")]
    LongDescription,
    #[error("price must not be less than zero")]
    PriceLessZero,
    #[error("price must not exceed 100000000")]
    BigPrice,
    #[error("price must have at most 2 digits after the decimal point")]
    BigPricePrecision,
    #[error("image must be a jpg, jpeg, png or webp file")]
    WrongImageFormat,
    #[error("image URL is malformed")]
    WrongUrl,
}

impl AdvertisementError {
    /// Machine-readable code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            AdvertisementError::ShortTitle => "SHORT_TITLE",
            AdvertisementError::LongTitle => "LONG_TITLE",
            AdvertisementError::WrongTitleSymbols => "WRONG_TITLE_SYMBOLS",
            AdvertisementError::ShortDescription => "SHORT_DESCRIPTION",
            AdvertisementError::LongDescription => "LONG_DESCRIPTION",
            AdvertisementError::PriceLessZero => "PRICE_LESS_ZERO",
            AdvertisementError::BigPrice => "BIG_PRICE",
            AdvertisementError::BigPricePrecision => "BIG_PRICE_PRECISION",
            AdvertisementError::WrongImageFormat => "WRONG_IMAGE_FORMAT",
            AdvertisementError::WrongUrl => "WRONG_URL",
        }
    }
}

/// Validated advertisement fields
#[derive(Debug, Clone, PartialEq)]
pub struct AdvertisementFields {
    pub title: Title,
    pub description: Description,
    pub price: Price,
    pub image_url: ImageUrl,
}

/// Validate advertisement fields
///
/// Checked in order title, description, price, image URL; the first
/// failure wins.
pub fn validate_advertisement(
    title: String,
    description: String,
    price: f64,
    image_url: String,
) -> Result<AdvertisementFields, AdvertisementError> {
    Ok(AdvertisementFields {
        title: Title::new(title)?,
        description: Description::new(description)?,
        price: Price::new(price)?,
        image_url: ImageUrl::new(image_url)?,
    })
}

/// Apply the price rules to both listing bounds, `min` first
pub fn validate_filter_prices(min: f64, max: f64) -> Result<(Price, Price), AdvertisementError> {
    Ok((Price::new(min)?, Price::new(max)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(title: &str, description: &str, price: f64, url: &str) -> Result<(), AdvertisementError> {
        validate_advertisement(
            title.to_string(),
            description.to_string(),
            price,
            url.to_string(),
        )
        .map(|_| ())
    }

    #[test]
    fn test_valid_advertisement() {
        assert_eq!(check("Bike", "Red bike", 150.5, "https://x.com/bike.png"), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(
            check("B", "", -1.0, "nope"),
            Err(AdvertisementError::ShortTitle)
        );
        assert_eq!(
            check("Bike", "", -1.0, "nope"),
            Err(AdvertisementError::ShortDescription)
        );
        assert_eq!(
            check("Bike", "Red", -1.0, "nope"),
            Err(AdvertisementError::PriceLessZero)
        );
        assert_eq!(
            check("Bike", "Red", 5.999, "nope"),
            Err(AdvertisementError::BigPricePrecision)
        );
        assert_eq!(
            check("Bike", "Red", 5.99, "nope"),
            Err(AdvertisementError::WrongUrl)
        );
    }

    #[test]
    fn test_filter_prices_min_first() {
        assert_eq!(
            validate_filter_prices(-1.0, 1e9).map(|_| ()),
            Err(AdvertisementError::PriceLessZero)
        );
        assert_eq!(
            validate_filter_prices(0.0, 1e9).map(|_| ()),
            Err(AdvertisementError::BigPrice)
        );
        let (min, max) = validate_filter_prices(10.0, 5.0).unwrap();
        assert!(min > max);
    }

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            AdvertisementError::ShortTitle,
            AdvertisementError::LongTitle,
            AdvertisementError::WrongTitleSymbols,
            AdvertisementError::ShortDescription,
            AdvertisementError::LongDescription,
            AdvertisementError::PriceLessZero,
            AdvertisementError::BigPrice,
            AdvertisementError::BigPricePrecision,
            AdvertisementError::WrongImageFormat,
            AdvertisementError::WrongUrl,
        ];
        let codes: std::collections::HashSet<_> = all.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), all.len());
    }
}
