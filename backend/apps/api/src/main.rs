//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors render
//! through each context's error type.

mod app;
mod config;

use std::sync::Arc;

use ads::{AdsConfig, PgAdsRepository};
use auth::{AuthConfig, PgAuthRepository};
use axum::http::{HeaderValue, Method, header};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ApiConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(config.log_format);
    tracing::debug!(?config, "Configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .max_lifetime(config.pool.max_lifetime)
        .idle_timeout(config.pool.idle_timeout)
        .acquire_timeout(config.pool.acquire_timeout)
        .connect_with(config.database.clone())
        .await?;

    tracing::info!(
        max_connections = config.pool.max_connections,
        min_connections = config.pool.min_connections,
        "Connected to database"
    );

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(
        AuthConfig::new(config.jwt_secret.as_bytes())
            .with_pepper(config.password_pepper.as_ref().map(|p| p.as_bytes().to_vec())),
    );
    let ads_config = Arc::new(AdsConfig::default());

    // CORS configuration
    let allowed_origins: Vec<HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = app::build_router(
        PgAuthRepository::new(pool.clone()),
        PgAdsRepository::new(pool.clone()),
        auth_config,
        ads_config,
    )
    .layer(TraceLayer::new_for_http())
    .layer(cors);

    // Start server
    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!(addr = %config.server_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "api=info,auth=info,ads=info,tower_http=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
