//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::advertisement::Advertisement;
use crate::domain::filter::ListingFilter;
use crate::error::AdsResult;

/// Advertisement repository trait
#[trait_variant::make(AdsRepository: Send)]
pub trait LocalAdsRepository {
    /// Store a new advertisement
    async fn create(&self, advertisement: &Advertisement) -> AdsResult<()>;

    /// One page of advertisements priced within the filter's inclusive
    /// range, ordered by the filter's column then insertion order
    async fn list(&self, filter: &ListingFilter) -> AdsResult<Vec<Advertisement>>;
}
