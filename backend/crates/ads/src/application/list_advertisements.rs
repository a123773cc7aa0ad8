//! List Advertisements Use Case
//!
//! Turns raw query parameters into a [`ListingFilter`], fetches one page,
//! and flags the rows the requester owns.

use std::sync::Arc;

use crate::application::config::AdsConfig;
use crate::domain::entity::advertisement::ListedAdvertisement;
use crate::domain::filter::{ListingFilter, OrderBy, OrderDirection};
use crate::domain::repository::AdsRepository;
use crate::domain::value_object::validate_filter_prices;
use crate::domain::value_object::price::MAX_PRICE;
use crate::error::{AdsError, AdsResult};

/// Raw listing parameters as they appear in the query string
///
/// Missing and empty values both fall back to the default.
#[derive(Debug, Clone, Default)]
pub struct ListingParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
}

/// List advertisements input
#[derive(Debug, Clone, Default)]
pub struct ListAdvertisementsInput {
    pub params: ListingParams,
    /// Login of the caller, `None` when anonymous
    pub requester: Option<String>,
}

pub struct ListAdvertisementsUseCase<R>
where
    R: AdsRepository,
{
    repo: Arc<R>,
    config: Arc<AdsConfig>,
}

impl<R> ListAdvertisementsUseCase<R>
where
    R: AdsRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AdsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListAdvertisementsInput) -> AdsResult<Vec<ListedAdvertisement>> {
        let filter = parse_filter(input.params, &self.config)?;

        if filter.is_empty_range() {
            return Ok(Vec::new());
        }

        let rows = self.repo.list(&filter).await?;

        tracing::debug!(
            page = filter.page,
            limit = filter.limit,
            order_by = %filter.order_by,
            order = %filter.direction,
            rows = rows.len(),
            "Advertisements listed"
        );

        Ok(ListedAdvertisement::mark_ownership(
            rows,
            input.requester.as_deref(),
        ))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_positive(name: &str, value: Option<String>, default: u32) -> AdsResult<u32> {
    match present(value) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                AdsError::InvalidFilter(format!("{name} must be a positive integer, got {raw:?}"))
            }),
    }
}

fn parse_price(name: &str, value: Option<String>, default: f64) -> AdsResult<f64> {
    match present(value) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| AdsError::InvalidFilter(format!("{name} must be a number, got {raw:?}"))),
    }
}

/// Validate raw listing parameters
///
/// Unparseable or out-of-range paging and sort values are `InvalidFilter`.
/// Price bounds go through the advertisement price rules, `min_price`
/// first, and keep their specific error codes.
pub fn parse_filter(params: ListingParams, config: &AdsConfig) -> AdsResult<ListingFilter> {
    let page = parse_positive("page", params.page, 1)?;
    let limit = parse_positive("limit", params.limit, config.default_page_size)?;
    if limit > config.max_page_size {
        return Err(AdsError::InvalidFilter(format!(
            "limit must not exceed {}",
            config.max_page_size
        )));
    }

    let min_price = parse_price("min_price", params.min_price, 0.0)?;
    let max_price = parse_price("max_price", params.max_price, MAX_PRICE)?;

    let order_by = match present(params.order_by) {
        Some(raw) => raw.parse::<OrderBy>()?,
        None => OrderBy::default(),
    };
    let direction = match present(params.order) {
        Some(raw) => raw.parse::<OrderDirection>()?,
        None => OrderDirection::default(),
    };

    let (min_price, max_price) = validate_filter_prices(min_price, max_price)?;

    Ok(ListingFilter {
        page,
        limit,
        min_price,
        max_price,
        order_by,
        direction,
    })
}
