//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, middleware, and identity extractors.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::{CurrentUser, MaybeUser};
pub use handlers::AuthAppState;
pub use middleware::{optional_authenticated, reject_if_authenticated, require_authenticated};
pub use router::{auth_router, auth_router_generic};
