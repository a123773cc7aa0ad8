//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` has
//! been loaded by `dotenvy`).

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use sqlx::postgres::PgConnectOptions;

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Connection pool bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            max_lifetime: Duration::from_secs(60 * 60),
            idle_timeout: Duration::from_secs(30 * 60),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Clone)]
pub struct ApiConfig {
    pub server_addr: SocketAddr,
    pub database: PgConnectOptions,
    pub pool: PoolConfig,
    pub jwt_secret: String,
    pub password_pepper: Option<String>,
    pub frontend_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let server_addr = get("SERVER_ADDR")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("SERVER_ADDR must be a socket address such as 0.0.0.0:3000")?;

        // Separate parts go through the builder, so credentials need no escaping
        let database = match get("DATABASE_URL") {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL must be a postgres:// connection URL")?,
            None => {
                let part = |key: &str| {
                    get(key).with_context(|| format!("{key} must be set when DATABASE_URL is not"))
                };
                let username = part("DB_USER")?;
                let password = part("DB_PASSWORD")?;
                let host = part("DB_HOST")?;
                let port = part("DB_PORT")?
                    .parse::<u16>()
                    .context("DB_PORT must be a port number")?;
                let name = part("DB_NAME")?;
                PgConnectOptions::new()
                    .host(&host)
                    .port(port)
                    .username(&username)
                    .password(&password)
                    .database(&name)
            }
        };

        let jwt_secret = get("JWT_SECRET").context("JWT_SECRET must be set")?;

        let mut pool = PoolConfig::default();
        if let Some(raw) = get("DB_MAX_CONNECTIONS") {
            pool.max_connections = raw
                .parse()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?;
        }
        if let Some(raw) = get("DB_MIN_CONNECTIONS") {
            pool.min_connections = raw
                .parse()
                .context("DB_MIN_CONNECTIONS must be a non-negative integer")?;
        }
        if pool.max_connections == 0 || pool.min_connections > pool.max_connections {
            bail!(
                "invalid pool bounds: min {} / max {}",
                pool.min_connections,
                pool.max_connections
            );
        }

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let log_format = match get("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("LOG_FORMAT must be text or json, got {other:?}"),
        };

        Ok(Self {
            server_addr,
            database,
            pool,
            jwt_secret,
            password_pepper: get("PASSWORD_PEPPER"),
            frontend_origins,
            log_format,
        })
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("server_addr", &self.server_addr)
            .field("database", &"[REDACTED]")
            .field("pool", &self.pool)
            .field("jwt_secret", &"[REDACTED]")
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("frontend_origins", &self.frontend_origins)
            .field("log_format", &self.log_format)
            .finish()
    }
}
