use crate::auth::models::UserModel;
use crate::orders::models::OrderModel;

/// In-memory stand-in for a database session, for development and testing
///
/// Mirrors the storage rules the SQL schema enforces (unique emails,
/// never-reused ids) so services behave the same against either backend.
/// Data is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub(crate) users: Vec<UserModel>,
    pub(crate) orders: Vec<OrderModel>,
    last_user_id: i64,
    last_order_id: i64,
}

impl InMemoryStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub(crate) fn next_user_id(&mut self) -> i64 {
        self.last_user_id += 1;
        self.last_user_id
    }

    pub(crate) fn next_order_id(&mut self) -> i64 {
        self.last_order_id += 1;
        self.last_order_id
    }
}
