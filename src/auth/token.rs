use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument, warn};

use super::types::AccessClaims;
use crate::shared::AppError;

/// Configuration for JWT token operations
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    pub expiration_minutes: i64,
}

impl TokenConfig {
    pub fn new(secret: String, expiration_minutes: i64) -> Self {
        Self {
            secret,
            expiration_minutes,
        }
    }

    /// Creates a signed access token for the given user
    #[instrument(skip(self))]
    pub fn create_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = TimeDelta::try_minutes(self.expiration_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                warn!(
                    expiration_minutes = self.expiration_minutes,
                    "Token expiration out of range"
                );
                AppError::Internal
            })?
            .timestamp() as usize;

        debug!(
            expiration_minutes = self.expiration_minutes,
            exp_timestamp = exp,
            "Creating access token with expiration"
        );

        let claims = AccessClaims {
            sub: user_id,
            exp,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            debug!(error = %e, "Failed to encode access token");
            AppError::Internal
        })
    }

    /// Validates signature and expiry, returning the claims if valid
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> Result<AccessClaims, AppError> {
        debug!("Decoding and validating access token");

        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| {
            debug!(
                user_id = data.claims.sub,
                exp = data.claims.exp,
                "Access token decoded successfully"
            );
            data.claims
        })
        .map_err(|e| {
            debug!(error = %e, "Failed to decode access token");
            AppError::JwtError(e.to_string())
        })
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}
