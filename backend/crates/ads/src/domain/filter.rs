//! Listing Filter
//!
//! Typed form of the `GET /advertisements` query string. Sort column and
//! direction are closed enums mapped onto static SQL fragments, so nothing
//! the client sends is ever spliced into a statement.

use std::fmt;
use std::str::FromStr;

use crate::domain::value_object::price::{MAX_PRICE, Price};
use crate::error::{AdsError, AdsResult};

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    Price,
    #[default]
    CreatedAt,
}

impl OrderBy {
    pub fn as_sql(&self) -> &'static str {
        match self {
            OrderBy::Price => "price",
            OrderBy::CreatedAt => "created_at",
        }
    }
}

impl FromStr for OrderBy {
    type Err = AdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(OrderBy::Price),
            "created_at" | "createdAt" => Ok(OrderBy::CreatedAt),
            other => Err(AdsError::InvalidFilter(format!(
                "order_by must be price or created_at, got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

impl FromStr for OrderDirection {
    type Err = AdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(OrderDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(OrderDirection::Desc)
        } else {
            Err(AdsError::InvalidFilter(format!(
                "order must be ASC or DESC, got {s:?}"
            )))
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Validated listing filter
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
    pub min_price: Price,
    pub max_price: Price,
    pub order_by: OrderBy,
    pub direction: OrderDirection,
}

impl ListingFilter {
    /// Filter with every parameter at its default
    pub fn with_limit(limit: u32) -> AdsResult<Self> {
        Ok(Self {
            page: 1,
            limit,
            min_price: Price::new(0.0)?,
            max_price: Price::new(MAX_PRICE)?,
            order_by: OrderBy::default(),
            direction: OrderDirection::default(),
        })
    }

    /// Rows to skip: `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    /// `min_price > max_price` can never match a row
    pub fn is_empty_range(&self) -> bool {
        self.min_price > self.max_price
    }
}
