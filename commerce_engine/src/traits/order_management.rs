use thiserror::Error;

use crate::db_types::{Order, OrderId, OrderItem, Product};

#[derive(Debug, Clone, Error)]
pub enum OrderApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("No orders found for user {0}")]
    NoOrdersFound(String),
}

impl From<sqlx::Error> for OrderApiError {
    fn from(e: sqlx::Error) -> Self {
        OrderApiError::DatabaseError(e.to_string())
    }
}

/// The `OrderManagement` trait defines read-side queries over orders and the entities the
/// reconciliation flow touches. The [`ShopDatabase`](crate::traits::ShopDatabase) trait handles the
/// actual state transitions; `OrderManagement` only reports on them.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Fetches the order with the given order id, or `None` if it does not exist.
    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderApiError>;

    /// Fetches the line items for the given order, in the sequence they were drafted.
    async fn fetch_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderApiError>;

    /// Fetches all orders for the given user, sorted by order date, newest first.
    async fn fetch_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, OrderApiError>;

    /// Fetches a product record, or `None` if it does not exist.
    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, OrderApiError>;

    /// Reports whether the cart with the given id still exists.
    async fn cart_exists(&self, cart_id: &str) -> Result<bool, OrderApiError>;
}
