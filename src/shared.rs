use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::{password::PasswordHasher, token::TokenConfig};
use crate::db::Database;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub token_config: TokenConfig,
    pub password_hasher: PasswordHasher,
}

impl AppState {
    pub fn new(
        database: Database,
        token_config: TokenConfig,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            database,
            token_config,
            password_hasher,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("JWT error: {0}")]
    JwtError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Lookup misses surface as 400 alongside conflicts, not 404
            AppError::Conflict(_) | AppError::NotFound(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::JwtError(_) => StatusCode::UNAUTHORIZED,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            AppError::Conflict(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::JwtError(msg)
            | AppError::ServiceUnavailable(msg) => msg,
            AppError::DatabaseError(msg) => format!("Database error: {}", msg),
            AppError::Internal => "Internal server error".to_string(),
        };

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}
