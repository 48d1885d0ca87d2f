use axum::Json;
use tracing::{info, instrument};

use super::{
    service::OrderService,
    types::{CreateOrderRequest, CreateOrderResponse, OrdersStatusResponse},
};
use crate::db::DbSession;
use crate::shared::AppError;

/// HTTP handler for the orders landing route
///
/// GET /orders/
#[instrument(name = "orders_home")]
pub async fn orders_home() -> Json<OrdersStatusResponse> {
    Json(OrdersStatusResponse {
        message: "Você acessou a rota de pedidos.".to_string(),
    })
}

/// HTTP handler for creating a new order
///
/// POST /orders/pedido
/// Returns the generated order id
#[instrument(name = "create_order", skip(session))]
pub async fn create_order(
    mut session: DbSession,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    info!(user_id = request.usuario, "Creating new order");

    let mut service = OrderService::new(&mut session);
    let order = service.create_order(request).await?;

    info!(order_id = order.id, "Order created successfully");

    Ok(Json(CreateOrderResponse {
        message: format!("Pedido criado com sucesso. ID do pedido: {}", order.id),
        id: order.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::create_app;
    use crate::shared::test_utils::AppStateBuilder;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt; // for `oneshot`

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn app_with_user() -> Router {
        let app = create_app(AppStateBuilder::new().build().await);
        let response = app
            .clone()
            .oneshot(post_json(
                "/auth/criar_conta",
                r#"{"nome":"Ana","email":"ana@x.com","senha":"secret123"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        app
    }

    #[tokio::test]
    async fn test_orders_home_handler() {
        let app = create_app(AppStateBuilder::new().build().await);

        let request = Request::builder()
            .method("GET")
            .uri("/orders/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Você acessou a rota de pedidos.");
    }

    #[tokio::test]
    async fn test_create_order_handler() {
        let app = app_with_user().await;

        let response = app
            .oneshot(post_json("/orders/pedido", r#"{"usuario":1}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let id = json["id"].as_i64().unwrap();
        assert!(id > 0);
        assert!(json["message"].as_str().unwrap().contains(&id.to_string()));
    }

    #[tokio::test]
    async fn test_create_order_handler_unknown_user() {
        let app = create_app(AppStateBuilder::new().build().await);

        let response = app
            .oneshot(post_json("/orders/pedido", r#"{"usuario":42}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_order_handler_wrong_type() {
        let app = create_app(AppStateBuilder::new().build().await);

        let response = app
            .oneshot(post_json(
                "/orders/pedido",
                r#"{"usuario":"not-a-number"}"#.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
