//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_advertisement;
pub mod list_advertisements;

// Re-exports
pub use config::AdsConfig;
pub use create_advertisement::{
    CreateAdvertisementInput, CreateAdvertisementOutput, CreateAdvertisementUseCase,
};
pub use list_advertisements::{
    ListAdvertisementsInput, ListAdvertisementsUseCase, ListingParams, parse_filter,
};
