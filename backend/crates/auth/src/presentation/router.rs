//! Auth Router

use axum::{Router, middleware, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::reject_if_authenticated;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route(
            "/login",
            post(handlers::login::<R>).layer(middleware::from_fn_with_state(
                config,
                reject_if_authenticated,
            )),
        )
        .with_state(state)
}
