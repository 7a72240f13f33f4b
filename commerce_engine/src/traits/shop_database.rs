use thiserror::Error;

use crate::{
    db_types::{NewOrder, Order, OrderId, User},
    traits::{OrderApiError, OrderManagement},
};

#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Order {0} can not be found")]
    OrderNotFound(OrderId),
    #[error("An order with id {0} already exists")]
    OrderAlreadyExists(OrderId),
    #[error("User {0} can not be found")]
    UserNotFound(String),
    #[error("Product {product_id} referenced by order {order_id} can not be found")]
    ProductNotFound { order_id: OrderId, product_id: String },
    #[error("The order is already in the requested state")]
    OrderModificationNoOp,
    #[error("The requested state transition is not permitted for this order")]
    OrderModificationForbidden,
}

impl From<sqlx::Error> for OrderFlowError {
    fn from(e: sqlx::Error) -> Self {
        OrderFlowError::DatabaseError(e.to_string())
    }
}

impl From<OrderApiError> for OrderFlowError {
    fn from(e: OrderApiError) -> Self {
        OrderFlowError::DatabaseError(e.to_string())
    }
}

/// This trait defines the write-side behaviour for backends supporting the storefront payment engine.
///
/// This behaviour includes:
/// * Persisting freshly drafted orders and their line items.
/// * Recording the gateway's hosted-checkout URL against a pending order.
/// * Driving the reconciliation state machine in response to gateway callbacks. Every multi-step
///   transition (stock adjustment, cart removal, status change) MUST be atomic: either all of its
///   side effects are applied, or none are.
///
/// Each transition checks the order's current state first, so a duplicated gateway callback is
/// rejected as [`OrderFlowError::OrderModificationNoOp`] instead of being applied twice.
#[allow(async_fn_in_trait)]
pub trait ShopDatabase: Clone + OrderManagement {
    /// The URL of the database.
    fn url(&self) -> &str;

    /// Takes a new order and, in a single atomic transaction, stores the order and its line items.
    /// The order starts out as pending/pending with an empty payment URL.
    ///
    /// Returns the stored order, or [`OrderFlowError::OrderAlreadyExists`] for a duplicate order id.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderFlowError>;

    /// Fetches the user record for the given id. Returns `None` if the user does not exist.
    async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, OrderFlowError>;

    /// Stores the gateway's hosted-checkout URL on a pending order.
    async fn set_payment_url(&self, order_id: &OrderId, url: &str) -> Result<Order, OrderFlowError>;

    /// Settles a successfully paid order. In a single atomic transaction:
    /// * each line item's product stock is decremented by the ordered quantity (no floor check; stock
    ///   may go negative),
    /// * the originating cart is deleted,
    /// * the order becomes paid/confirmed and its payment URL is cleared.
    ///
    /// A missing product fails the whole transaction; no stock is adjusted and the order stays pending,
    /// so the callback can be retried safely.
    async fn settle_order_paid(&self, order_id: &OrderId) -> Result<Order, OrderFlowError>;

    /// Handles a failed payment attempt: the order is reset to pending/pending (it remains
    /// re-enterable) and the originating cart is deleted.
    async fn reset_failed_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError>;

    /// Handles a cancelled payment: the order becomes cancelled/cancelled, the payment URL is cleared
    /// and the originating cart is deleted.
    async fn cancel_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError>;

    /// Closes the database connection(s).
    async fn close(&mut self) -> Result<(), OrderFlowError>;
}
