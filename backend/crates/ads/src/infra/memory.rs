//! In-memory Repository
//!
//! `Vec` behind a `tokio::sync::RwLock`, applying the same range, sort,
//! and paging rules as the SQL listing. Insertion order stands in for
//! `advertisement_id`.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::advertisement::Advertisement;
use crate::domain::filter::{ListingFilter, OrderBy, OrderDirection};
use crate::domain::repository::AdsRepository;
use crate::error::AdsResult;

#[derive(Clone, Default)]
pub struct InMemoryAdsRepository {
    advertisements: Arc<RwLock<Vec<Advertisement>>>,
}

impl InMemoryAdsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdsRepository for InMemoryAdsRepository {
    async fn create(&self, advertisement: &Advertisement) -> AdsResult<()> {
        self.advertisements.write().await.push(advertisement.clone());
        Ok(())
    }

    async fn list(&self, filter: &ListingFilter) -> AdsResult<Vec<Advertisement>> {
        let advertisements = self.advertisements.read().await;

        let mut matching: Vec<(usize, &Advertisement)> = advertisements
            .iter()
            .enumerate()
            .filter(|(_, ad)| ad.price >= filter.min_price && ad.price <= filter.max_price)
            .collect();

        matching.sort_by(|(id_a, a), (id_b, b)| {
            let ordering = match filter.order_by {
                OrderBy::Price => a.price.cmp(&b.price),
                OrderBy::CreatedAt => a.created_at.cmp(&b.created_at),
            }
            .then(id_a.cmp(id_b));

            match filter.direction {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            }
        });

        let offset = usize::try_from(filter.offset()).unwrap_or(usize::MAX);
        let limit = filter.limit as usize;

        Ok(matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(_, ad)| ad.clone())
            .collect())
    }
}
