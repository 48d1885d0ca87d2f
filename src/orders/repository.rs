use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use super::models::{NewOrder, OrderModel};
use crate::db::{DbSession, InMemoryStore};
use crate::shared::AppError;

/// Trait for order repository operations
#[async_trait]
pub trait OrderRepository: Send {
    /// Inserts and commits the order, returning it with its new id
    async fn insert_order(&mut self, order: NewOrder) -> Result<OrderModel, AppError>;
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    #[instrument(skip(self, order), fields(user_id = order.user_id))]
    async fn insert_order(&mut self, order: NewOrder) -> Result<OrderModel, AppError> {
        if !self.users.iter().any(|u| u.id == order.user_id) {
            warn!("Order references unknown user in memory");
            return Err(AppError::NotFound("Usuário não encontrado".to_string()));
        }

        let model = order.into_model(self.next_order_id());
        self.orders.push(model.clone());

        debug!(order_id = model.id, "Order created successfully in memory");
        Ok(model)
    }
}

#[async_trait]
impl OrderRepository for DbSession {
    #[instrument(skip(self, order), fields(user_id = order.user_id))]
    async fn insert_order(&mut self, order: NewOrder) -> Result<OrderModel, AppError> {
        debug!("Creating order in database");

        let result = sqlx::query("INSERT INTO pedidos (status, usuario, preco) VALUES (?, ?, ?)")
            .bind(order.status.as_ref())
            .bind(order.user_id)
            .bind(order.price)
            .execute(self.connection())
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    warn!("Order references unknown user in database");
                    AppError::NotFound("Usuário não encontrado".to_string())
                }
                e => {
                    warn!(error = %e, "Failed to create order in database");
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let model = order.into_model(result.last_insert_rowid());
        debug!(order_id = model.id, "Order created successfully in database");
        Ok(model)
    }
}
