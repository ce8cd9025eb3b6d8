use std::env;
use std::net::SocketAddr;

use crate::shared::errors::{AppError, AppResult};

/// Cache lifetimes in seconds for each class of cached response
pub struct CacheTtl;

impl CacheTtl {
    /// Search results
    pub const SEARCH: u64 = 60 * 5;
    /// Single item retrieval
    pub const GET_SINGLE: u64 = 60 * 10;
    /// List retrieval
    pub const GET_LIST: u64 = 60 * 3;
    /// Default browser cache lifetime for API responses
    pub const DEFAULT_HTTP: u64 = 60;
    /// API documentation
    pub const DOCS: u64 = 60 * 60 * 24;
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_WRITE_RATE_LIMIT: u32 = 20;

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub api_key: String,
    pub write_rate_limit_per_minute: u32,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = Self::validated_database_url(env::var("DATABASE_URL").map_err(
            |_| AppError::InvalidInput("DATABASE_URL environment variable not found".to_string()),
        )?)?;

        let redis_url = env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::InvalidInput(format!("Invalid BIND_ADDR: {}", e)))?;

        let api_key = env::var("API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::InvalidInput("API_KEY environment variable not found".to_string())
            })?;

        let write_rate_limit_per_minute = match env::var("WRITE_RATE_LIMIT_PER_MINUTE") {
            Ok(raw) => raw.parse::<u32>()?,
            Err(_) => DEFAULT_WRITE_RATE_LIMIT,
        };

        Ok(Self {
            database_url,
            redis_url,
            bind_addr,
            api_key,
            write_rate_limit_per_minute: write_rate_limit_per_minute.max(1),
        })
    }

    fn validated_database_url(database_url: String) -> AppResult<String> {
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(AppError::InvalidInput(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        Ok(database_url)
    }
}
