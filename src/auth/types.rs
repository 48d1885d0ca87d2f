use serde::{Deserialize, Serialize};

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// User id
    pub sub: i64,
    /// Expiration timestamp
    pub exp: usize,
    /// Issued-at timestamp
    pub iat: usize,
}

/// Request payload for account registration
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub ativo: Option<bool>,
    pub admin: Option<bool>,
}

/// Request payload for login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub mensagem: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthStatusResponse {
    pub message: String,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
