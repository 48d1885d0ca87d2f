use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Sends a request through the router and returns status and JSON body
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn register(&self, nome: &str, email: &str, senha: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/auth/criar_conta",
            Some(json!({ "nome": nome, "email": email, "senha": senha })),
            None,
        )
        .await
    }

    pub async fn login(&self, email: &str, senha: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/auth/login",
            Some(json!({ "email": email, "senha": senha })),
            None,
        )
        .await
    }

    pub async fn create_order(&self, usuario: i64) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/orders/pedido",
            Some(json!({ "usuario": usuario })),
            None,
        )
        .await
    }

    pub async fn auth_status(&self, bearer: Option<&str>) -> (StatusCode, Value) {
        self.send("GET", "/auth/", None, bearer).await
    }

    /// Counts rows with the given email directly in the store
    pub async fn users_with_email(&self, email: &str) -> i64 {
        let mut session = self.state.database.session().await.unwrap();
        sqlx::query_scalar("SELECT COUNT(*) FROM usuarios WHERE email = ?")
            .bind(email)
            .fetch_one(session.connection())
            .await
            .unwrap()
    }
}
