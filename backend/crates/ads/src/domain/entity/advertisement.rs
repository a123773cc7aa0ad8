//! Advertisement Entity
//!
//! Immutable once stored. `owner_login` references `users.login`.

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::value_object::AdvertisementFields;
use crate::domain::value_object::description::Description;
use crate::domain::value_object::image_url::ImageUrl;
use crate::domain::value_object::price::Price;
use crate::domain::value_object::title::Title;

#[derive(Debug, Clone, PartialEq)]
pub struct Advertisement {
    pub title: Title,
    pub description: Description,
    pub price: Price,
    pub image_url: ImageUrl,
    pub owner_login: String,
    pub created_at: DateTime<Utc>,
}

impl Advertisement {
    /// New advertisement owned by `owner_login`, stamped now
    pub fn new(fields: AdvertisementFields, owner_login: impl Into<String>) -> Self {
        let AdvertisementFields {
            title,
            description,
            price,
            image_url,
        } = fields;

        Self {
            title,
            description,
            price,
            image_url,
            owner_login: owner_login.into(),
            // TIMESTAMPTZ keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn is_owned_by(&self, login: Option<&str>) -> bool {
        login.is_some_and(|login| login == self.owner_login)
    }
}

/// An advertisement as seen by a particular requester
#[derive(Debug, Clone, PartialEq)]
pub struct ListedAdvertisement {
    pub advertisement: Advertisement,
    pub is_mine: bool,
}

impl ListedAdvertisement {
    /// Flag each row owned by `requester`; anonymous requesters own nothing
    pub fn mark_ownership(rows: Vec<Advertisement>, requester: Option<&str>) -> Vec<Self> {
        rows.into_iter()
            .map(|advertisement| Self {
                is_mine: advertisement.is_owned_by(requester),
                advertisement,
            })
            .collect()
    }
}
