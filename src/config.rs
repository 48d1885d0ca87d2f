use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

use crate::db::DatabaseConfig;

/// Longest accepted access token lifetime: one year
pub const MAX_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration, read once at startup
#[derive(Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub database: DatabaseConfig,
    pub secret_key: String,
    pub token_expiration_minutes: i64,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, applying defaults for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("SECRET_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("SECRET_KEY"))?;

        let defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )?),
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let token_expiration_minutes = parse_or(&lookup, "ACCESS_TOKEN_EXPIRE_MINUTES", 30)?;
        if !(1..=MAX_TOKEN_EXPIRE_MINUTES).contains(&token_expiration_minutes) {
            return Err(ConfigError::Invalid {
                name: "ACCESS_TOKEN_EXPIRE_MINUTES",
                value: token_expiration_minutes.to_string(),
            });
        }

        Ok(Self {
            bind_address: parse_or(&lookup, "BIND_ADDRESS", SocketAddr::from(([127, 0, 0, 1], 8000)))?,
            database,
            secret_key,
            token_expiration_minutes,
            bcrypt_cost,
        })
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_address", &self.bind_address)
            .field("database", &self.database)
            .field("secret_key", &"<redacted>")
            .field("token_expiration_minutes", &self.token_expiration_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
