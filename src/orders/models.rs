use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strum_macros::{AsRefStr, Display, EnumString};

/// Lifecycle states an order can be in. Only `Pending` is reachable through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Canceled,
    Finalized,
}

/// Database model for the pedidos table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct OrderModel {
    pub id: i64,
    pub status: String, // OrderStatus stored as text
    #[sqlx(rename = "usuario")]
    pub user_id: i64,
    #[sqlx(rename = "preco")]
    pub price: f64,
}

impl OrderModel {
    /// Parses the stored status, if it is one we know about
    pub fn status(&self) -> Option<OrderStatus> {
        self.status.parse().ok()
    }
}

/// An order that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub status: OrderStatus,
    pub price: f64,
}

impl NewOrder {
    /// A pending order with price 0
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            status: OrderStatus::default(),
            price: 0.0,
        }
    }

    pub fn into_model(self, id: i64) -> OrderModel {
        OrderModel {
            id,
            status: self.status.to_string(),
            user_id: self.user_id,
            price: self.price,
        }
    }
}

/// Database model for the itens_pedido table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct OrderItemModel {
    pub id: i64,
    #[sqlx(rename = "quantidade")]
    pub quantity: i64,
    #[sqlx(rename = "sabor")]
    pub flavor: String,
    #[sqlx(rename = "tamanho")]
    pub size: String,
    #[sqlx(rename = "preco_unitario")]
    pub unit_price: f64,
    #[sqlx(rename = "pedido")]
    pub order_id: i64,
}

impl OrderItemModel {
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}
