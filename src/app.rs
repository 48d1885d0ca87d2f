use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{auth, orders, shared::AppState};

/// Builds the HTTP router with all routes and layers
pub fn create_app(app_state: AppState) -> Router {
    let auth_home = get(auth::auth_home).layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth::optional_jwt_auth,
    ));

    Router::new()
        .route("/auth/", auth_home)
        .route("/auth/criar_conta", post(auth::create_account))
        .route("/auth/login", post(auth::login))
        .route("/orders/", get(orders::orders_home))
        .route("/orders/pedido", post(orders::create_order))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
