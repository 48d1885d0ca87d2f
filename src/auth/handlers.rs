use axum::{extract::State, Extension, Json};
use tracing::{info, instrument};

use super::{
    service::AuthService,
    types::{
        AccessClaims, AuthStatusResponse, LoginRequest, RegisterRequest, RegisterResponse,
        TokenResponse,
    },
};
use crate::db::DbSession;
use crate::shared::{AppError, AppState};

/// HTTP handler for the auth landing route
///
/// GET /auth/
/// Reports whether the request carried a valid bearer token
#[instrument(name = "auth_home", skip(claims))]
pub async fn auth_home(claims: Option<Extension<AccessClaims>>) -> Json<AuthStatusResponse> {
    let response = match claims {
        Some(Extension(claims)) => AuthStatusResponse {
            message: "Você acessou a rota padrão de autenticação.".to_string(),
            authenticated: true,
            user_id: Some(claims.sub),
        },
        None => AuthStatusResponse {
            message: "Você acessou a rota padrão de autenticação.".to_string(),
            authenticated: false,
            user_id: None,
        },
    };

    info!(authenticated = response.authenticated, "Auth status served");
    Json(response)
}

/// HTTP handler for account registration
///
/// POST /auth/criar_conta
/// Returns a confirmation message containing the email
#[instrument(name = "create_account", skip(state, session, request), fields(email = %request.email))]
pub async fn create_account(
    State(state): State<AppState>,
    mut session: DbSession,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    info!("Creating new account");

    let mut service = AuthService::new(&mut session, state.password_hasher, &state.token_config);
    let response = service.register(request).await?;

    info!("Account created successfully");
    Ok(Json(response))
}

/// HTTP handler for login
///
/// POST /auth/login
/// Returns a signed access token
#[instrument(name = "login", skip(state, session, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    mut session: DbSession,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    info!("Logging in");

    let mut service = AuthService::new(&mut session, state.password_hasher, &state.token_config);
    let response = service.login(request).await?;

    info!("Login successful");
    Ok(Json(response))
}
