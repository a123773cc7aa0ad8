//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Login/password rules, entities, repository traits
//! - `application/` - Register and login use cases, the authorization gate
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, gate middleware, extractors, router
//!
//! ## Features
//! - `POST /register` with login + password
//! - `POST /login` returning a 5-minute HS256 bearer token
//! - Three gate policies other contexts layer onto their routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application pepper
//! - Stateless tokens: the `Authorization` header carries the bare JWT
//! - Login uniqueness enforced by the `users` primary key

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::identity::Identity;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::extract::*;
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
