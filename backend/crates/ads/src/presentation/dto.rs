//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ListingParams;
use crate::domain::entity::advertisement::{Advertisement, ListedAdvertisement};

/// Body of `POST /advertisements`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdvertisementRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
}

/// Query string of `GET /advertisements`
///
/// Kept as strings so malformed values surface as `INVALID_FILTER` with a
/// precise message instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
}

impl From<ListingQuery> for ListingParams {
    fn from(query: ListingQuery) -> Self {
        ListingParams {
            page: query.page,
            limit: query.limit,
            min_price: query.min_price,
            max_price: query.max_price,
            order_by: query.order_by,
            order: query.order,
        }
    }
}

/// Advertisement as returned to clients
///
/// Owner and ownership flag keep the wire names existing clients read
/// (`userlogin`, `ismine`).
#[derive(Debug, Clone, Serialize)]
pub struct AdvertisementResponse {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    #[serde(rename = "userlogin")]
    pub owner_login: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "ismine", skip_serializing_if = "std::ops::Not::not")]
    pub is_mine: bool,
}

impl From<Advertisement> for AdvertisementResponse {
    fn from(ad: Advertisement) -> Self {
        Self {
            price: ad.price.to_f64(),
            title: ad.title.as_str().to_string(),
            description: ad.description.as_str().to_string(),
            image_url: ad.image_url.as_str().to_string(),
            owner_login: ad.owner_login,
            created_at: ad.created_at,
            is_mine: false,
        }
    }
}

impl From<ListedAdvertisement> for AdvertisementResponse {
    fn from(listed: ListedAdvertisement) -> Self {
        Self {
            is_mine: listed.is_mine,
            ..Self::from(listed.advertisement)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::validate_advertisement;

    fn listed(is_mine: bool) -> ListedAdvertisement {
        let fields = validate_advertisement(
            "Bike".into(),
            "Red bike".into(),
            150.5,
            "https://x.com/bike.png".into(),
        )
        .unwrap();
        ListedAdvertisement {
            advertisement: Advertisement::new(fields, "alice"),
            is_mine,
        }
    }

    #[test]
    fn test_is_mine_omitted_when_false() {
        let json = serde_json::to_value(AdvertisementResponse::from(listed(false))).unwrap();
        assert!(json.get("ismine").is_none());
        assert_eq!(json["price"], 150.5);
        assert_eq!(json["userlogin"], "alice");
        assert!(json.get("owner_login").is_none());
    }

    #[test]
    fn test_is_mine_present_when_true() {
        let json = serde_json::to_value(AdvertisementResponse::from(listed(true))).unwrap();
        assert_eq!(json["ismine"], true);
        assert!(json.get("is_mine").is_none());
    }
}
