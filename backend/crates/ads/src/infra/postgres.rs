//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_foreign_key_violation;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entity::advertisement::Advertisement;
use crate::domain::filter::ListingFilter;
use crate::domain::repository::AdsRepository;
use crate::domain::value_object::{
    description::Description, image_url::ImageUrl, price::Price, title::Title,
};
use crate::error::{AdsError, AdsResult};

/// PostgreSQL-backed advertisement repository
#[derive(Clone)]
pub struct PgAdsRepository {
    pool: PgPool,
}

impl PgAdsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Listing statement for `filter`
///
/// Binds: `$1` min price, `$2` max price, `$3` limit, `$4` offset. Only the
/// static fragments of [`crate::domain::OrderBy`] and
/// [`crate::domain::OrderDirection`] are interpolated.
pub fn listing_sql(filter: &ListingFilter) -> String {
    let column = filter.order_by.as_sql();
    let direction = filter.direction.as_sql();
    format!(
        "SELECT title, description, price, image_url, owner_login, created_at \
         FROM advertisements \
         WHERE price BETWEEN $1 AND $2 \
         ORDER BY {column} {direction}, advertisement_id {direction} \
         LIMIT $3 OFFSET $4"
    )
}

/// `owner_login` references `users`; a token that outlived its user
/// fails the foreign key.
fn insert_error(err: sqlx::Error) -> AdsError {
    if is_foreign_key_violation(&err) {
        AdsError::UnknownOwner
    } else {
        AdsError::Database(err)
    }
}

// ============================================================================
// Ads Repository Implementation
// ============================================================================

impl AdsRepository for PgAdsRepository {
    async fn create(&self, advertisement: &Advertisement) -> AdsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO advertisements (
                title,
                description,
                price,
                image_url,
                owner_login,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(advertisement.title.as_str())
        .bind(advertisement.description.as_str())
        .bind(advertisement.price.as_decimal())
        .bind(advertisement.image_url.as_str())
        .bind(&advertisement.owner_login)
        .bind(advertisement.created_at)
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn list(&self, filter: &ListingFilter) -> AdsResult<Vec<Advertisement>> {
        let sql = listing_sql(filter);
        let rows = sqlx::query_as::<_, AdvertisementRow>(&sql)
            .bind(filter.min_price.as_decimal())
            .bind(filter.max_price.as_decimal())
            .bind(i64::from(filter.limit))
            .bind(filter.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AdvertisementRow::into_advertisement).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdvertisementRow {
    title: String,
    description: String,
    price: Decimal,
    image_url: String,
    owner_login: String,
    created_at: DateTime<Utc>,
}

impl AdvertisementRow {
    fn into_advertisement(self) -> Advertisement {
        Advertisement {
            title: Title::from_trusted(self.title),
            description: Description::from_trusted(self.description),
            price: Price::from_decimal(self.price),
            image_url: ImageUrl::from_trusted(self.image_url),
            owner_login: self.owner_login,
            created_at: self.created_at,
        }
    }
}
