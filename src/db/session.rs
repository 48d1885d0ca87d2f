use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection, SqlitePool};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::shared::{AppError, AppState};

/// One conversation with the store, scoped to a single request.
///
/// Handlers take it as an extractor. The underlying connection goes back to
/// the pool when this value is dropped, on success and error paths alike.
pub struct DbSession {
    id: Uuid,
    conn: PoolConnection<Sqlite>,
}

impl DbSession {
    pub(super) async fn acquire(pool: &SqlitePool) -> Result<Self, AppError> {
        let conn = pool.acquire().await.map_err(|e| {
            warn!(error = %e, "Failed to acquire database session");
            AppError::ServiceUnavailable("Banco de dados indisponível".to_string())
        })?;

        let id = Uuid::new_v4();
        debug!(session_id = %id, "Database session opened");
        Ok(Self { id, conn })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        debug!(session_id = %self.id, "Database session released");
    }
}

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.database.session().await
    }
}
