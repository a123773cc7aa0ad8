//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::AdsAppState;
pub use router::{ads_router, ads_router_generic};
