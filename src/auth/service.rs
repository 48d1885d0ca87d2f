use tracing::{info, instrument, warn};

use super::{
    models::NewUser,
    password::PasswordHasher,
    repository::{UserRepository, DUPLICATE_EMAIL},
    token::TokenConfig,
    types::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse},
};
use crate::shared::AppError;

pub const TOKEN_TYPE: &str = "Bearer";

/// Service for registration and login, scoped to one repository session
pub struct AuthService<'a, R: UserRepository> {
    repository: &'a mut R,
    password_hasher: PasswordHasher,
    token_config: &'a TokenConfig,
}

impl<'a, R: UserRepository> AuthService<'a, R> {
    pub fn new(
        repository: &'a mut R,
        password_hasher: PasswordHasher,
        token_config: &'a TokenConfig,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_config,
        }
    }

    /// Creates a new account unless the email is already registered
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&mut self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        info!("Starting registration");

        if self
            .repository
            .find_user_by_email(&request.email)
            .await?
            .is_some()
        {
            warn!("Registration rejected, email already registered");
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let hasher = self.password_hasher;
        let password = request.senha;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                warn!(error = %e, "Password hashing task failed");
                AppError::Internal
            })??;

        let user = self
            .repository
            .insert_user(NewUser {
                name: request.nome,
                email: request.email,
                password_hash,
                active: request.ativo.unwrap_or(true),
                admin: request.admin.unwrap_or(false),
            })
            .await?;

        info!(user_id = user.id, "Registration completed successfully");
        Ok(RegisterResponse {
            mensagem: format!("cadastrado com sucesso: {}", user.email),
        })
    }

    /// Verifies credentials and issues an access token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&mut self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        info!("Starting login");

        let user = match self.repository.find_user_by_email(&request.email).await? {
            Some(user) => user,
            None => {
                warn!("Login rejected, user not found");
                return Err(AppError::NotFound("Usuário não encontrado".to_string()));
            }
        };

        let hasher = self.password_hasher;
        let password = request.senha;
        let digest = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| {
                warn!(error = %e, "Password verification task failed");
                AppError::Internal
            })?;

        if !verified {
            warn!(user_id = user.id, "Login rejected, wrong password");
            return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
        }

        let access_token = self.token_config.create_token(user.id)?;

        info!(user_id = user.id, "Login completed successfully");
        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        })
    }
}
