// Library crate for the orders and authentication API
// This file exposes the public API for integration tests

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod orders;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::create_app;
pub use auth::{password::PasswordHasher, token::TokenConfig, AccessClaims};
pub use config::{AppConfig, ConfigError};
pub use db::{Database, DatabaseConfig, DbSession, InMemoryStore};
pub use shared::{AppError, AppState};
