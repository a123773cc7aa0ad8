//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAdsRepository;
pub use postgres::PgAdsRepository;
