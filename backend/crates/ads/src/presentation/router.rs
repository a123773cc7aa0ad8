//! Ads Router

use auth::AuthConfig;
use auth::middleware::{optional_authenticated, require_authenticated};
use axum::{Router, middleware, routing::{get, post}};
use std::sync::Arc;

use crate::application::config::AdsConfig;
use crate::domain::repository::AdsRepository;
use crate::infra::postgres::PgAdsRepository;
use crate::presentation::handlers::{self, AdsAppState};

/// Create the Ads router with PostgreSQL repository
pub fn ads_router(
    repo: PgAdsRepository,
    config: Arc<AdsConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router {
    ads_router_generic(repo, config, auth_config)
}

/// Create a generic Ads router for any repository implementation
///
/// `POST` requires a valid token; `GET` accepts anonymous callers but
/// still rejects a bad token.
pub fn ads_router_generic<R>(
    repo: R,
    config: Arc<AdsConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: AdsRepository + Clone + Send + Sync + 'static,
{
    let state = AdsAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/advertisements",
            get(handlers::list_advertisements::<R>).layer(middleware::from_fn_with_state(
                auth_config.clone(),
                optional_authenticated,
            )),
        )
        // Same path, separate method router: a layer only wraps the
        // methods registered before it
        .route(
            "/advertisements",
            post(handlers::create_advertisement::<R>).layer(middleware::from_fn_with_state(
                auth_config,
                require_authenticated,
            )),
        )
        .with_state(state)
}
