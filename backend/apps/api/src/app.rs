//! Router assembly
//!
//! Merges the bounded-context routers and adds the health check. Generic
//! over repositories so the whole surface can be exercised in memory.

use std::sync::Arc;

use ads::AdsConfig;
use ads::domain::repository::AdsRepository;
use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn build_router<U, A>(
    users: U,
    advertisements: A,
    auth_config: Arc<AuthConfig>,
    ads_config: Arc<AdsConfig>,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    A: AdsRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .merge(auth::auth_router_generic(users, auth_config.clone()))
        .merge(ads::ads_router_generic(advertisements, ads_config, auth_config))
}
