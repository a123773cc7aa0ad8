//! Domain Layer
//!
//! Advertisement rules, the listing filter, and the repository trait.

pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_object;

pub use entity::advertisement::{Advertisement, ListedAdvertisement};
pub use filter::{ListingFilter, OrderBy, OrderDirection};
pub use repository::AdsRepository;
pub use value_object::{AdvertisementError, validate_advertisement, validate_filter_prices};
