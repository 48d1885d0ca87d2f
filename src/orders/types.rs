use serde::{Deserialize, Serialize};

/// Request payload for creating an order
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub usuario: i64, // Owning user id
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OrdersStatusResponse {
    pub message: String,
}
