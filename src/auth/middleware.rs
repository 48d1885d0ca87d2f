use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::{debug, instrument, warn};

use crate::shared::AppState;

/// Optional bearer authentication - attaches `AccessClaims` to the request when a valid
/// `Authorization: Bearer` header is present, and lets the request through either way.
/// Usage: .layer(middleware::from_fn_with_state(app_state.clone(), auth::optional_jwt_auth))
/// Handlers can then extract Option<Extension<AccessClaims>>.
#[instrument(skip(state, req, next))]
pub async fn optional_jwt_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let validation = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| state.token_config.validate_token(token));

    match validation {
        Some(Ok(claims)) => {
            debug!(user_id = claims.sub, "Bearer token accepted");
            req.extensions_mut().insert(claims);
        }
        Some(Err(e)) => warn!("Ignoring invalid bearer token: {}", e),
        None => debug!("No bearer token on request"),
    }

    next.run(req).await
}
