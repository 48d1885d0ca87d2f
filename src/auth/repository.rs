use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use super::models::{NewUser, UserModel};
use crate::db::{DbSession, InMemoryStore};
use crate::shared::AppError;

pub(crate) const DUPLICATE_EMAIL: &str = "E-mail do usuário já cadastrado";

/// Trait for user repository operations
#[async_trait]
pub trait UserRepository: Send {
    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<UserModel>, AppError>;
    async fn find_user_by_id(&mut self, user_id: i64) -> Result<Option<UserModel>, AppError>;
    /// Inserts and commits the user. A duplicate email is a `Conflict`.
    async fn insert_user(&mut self, user: NewUser) -> Result<UserModel, AppError>;
}

#[async_trait]
impl UserRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<UserModel>, AppError> {
        debug!("Fetching user by email from memory");
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    #[instrument(skip(self))]
    async fn find_user_by_id(&mut self, user_id: i64) -> Result<Option<UserModel>, AppError> {
        debug!("Fetching user by id from memory");
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert_user(&mut self, user: NewUser) -> Result<UserModel, AppError> {
        if self.users.iter().any(|u| u.email == user.email) {
            warn!("User email already exists in memory");
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let model = user.into_model(self.next_user_id());
        self.users.push(model.clone());

        debug!(user_id = model.id, "User created successfully in memory");
        Ok(model)
    }
}

#[async_trait]
impl UserRepository for DbSession {
    #[instrument(skip(self))]
    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<UserModel>, AppError> {
        debug!("Fetching user by email from database");

        let user = sqlx::query_as::<_, UserModel>(
            "SELECT id, nome, email, senha, ativo, admin FROM usuarios WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.connection())
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to fetch user by email from database");
            AppError::DatabaseError(e.to_string())
        })?;

        match &user {
            Some(u) => debug!(user_id = u.id, "User found in database"),
            None => debug!("User not found in database"),
        }

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_user_by_id(&mut self, user_id: i64) -> Result<Option<UserModel>, AppError> {
        debug!("Fetching user by id from database");

        sqlx::query_as::<_, UserModel>(
            "SELECT id, nome, email, senha, ativo, admin FROM usuarios WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.connection())
        .await
        .map_err(|e| {
            warn!(error = %e, user_id, "Failed to fetch user by id from database");
            AppError::DatabaseError(e.to_string())
        })
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert_user(&mut self, user: NewUser) -> Result<UserModel, AppError> {
        debug!("Creating user in database");

        let result = sqlx::query(
            "INSERT INTO usuarios (nome, email, senha, ativo, admin) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.active)
        .bind(user.admin)
        .execute(self.connection())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                warn!("User email already exists in database");
                AppError::Conflict(DUPLICATE_EMAIL.to_string())
            }
            e => {
                warn!(error = %e, "Failed to create user in database");
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let model = user.into_model(result.last_insert_rowid());
        debug!(user_id = model.id, "User created successfully in database");
        Ok(model)
    }
}
