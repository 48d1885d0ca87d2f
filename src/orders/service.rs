use tracing::{info, instrument, warn};

use super::{
    models::{NewOrder, OrderModel},
    repository::OrderRepository,
    types::CreateOrderRequest,
};
use crate::auth::repository::UserRepository;
use crate::shared::AppError;

/// Service for order business logic
pub struct OrderService<'a, R: UserRepository + OrderRepository> {
    repository: &'a mut R,
}

impl<'a, R: UserRepository + OrderRepository> OrderService<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Creates a pending, zero-priced order owned by an existing user
    #[instrument(skip(self))]
    pub async fn create_order(&mut self, request: CreateOrderRequest) -> Result<OrderModel, AppError> {
        info!(user_id = request.usuario, "Starting order creation");

        if self
            .repository
            .find_user_by_id(request.usuario)
            .await?
            .is_none()
        {
            warn!(user_id = request.usuario, "Order rejected, user not found");
            return Err(AppError::NotFound("Usuário não encontrado".to_string()));
        }

        let order = self
            .repository
            .insert_order(NewOrder::for_user(request.usuario))
            .await?;

        info!(order_id = order.id, "Order created successfully");
        Ok(order)
    }
}
