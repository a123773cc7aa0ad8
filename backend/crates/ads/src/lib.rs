//! Ads (Advertisements) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Advertisement rules, listing filter, repository trait
//! - `application/` - Create and list use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - `POST /advertisements` for authenticated users
//! - `GET /advertisements` with price range, sorting, and paging; rows
//!   owned by the caller are flagged `ismine`
//!
//! Both routes are gated by the middlewares from the `auth` crate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AdsConfig;
pub use error::{AdsError, AdsResult};
pub use infra::{memory::InMemoryAdsRepository, postgres::PgAdsRepository};
pub use presentation::router::{ads_router, ads_router_generic};

pub mod models {
    pub use crate::domain::entity::advertisement::*;
    pub use crate::domain::filter::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAdsRepository as AdsStore;
}
