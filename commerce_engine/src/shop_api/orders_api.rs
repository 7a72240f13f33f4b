use log::*;

use crate::{
    db_types::{Order, OrderId},
    order_objects::{OrderDetails, OrderHistory},
    traits::{OrderApiError, OrderManagement},
};

/// `OrdersApi` provides the read-only queries over orders: a user's order history and the details of
/// a single order.
pub struct OrdersApi<B> {
    db: B,
}

impl<B> OrdersApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> OrdersApi<B>
where B: OrderManagement
{
    /// Fetches all orders for the given user, newest first.
    ///
    /// An empty result set is surfaced as [`OrderApiError::NoOrdersFound`] rather than an empty
    /// success. Upstream clients rely on the 404 to distinguish "never ordered" from "no matches".
    pub async fn history_for_user(&self, user_id: &str) -> Result<OrderHistory, OrderApiError> {
        let orders = self.db.fetch_orders_for_user(user_id).await?;
        if orders.is_empty() {
            debug!("🔍️📦️ No orders on record for user {user_id}");
            return Err(OrderApiError::NoOrdersFound(user_id.to_string()));
        }
        let total_orders = orders.iter().map(|o| o.total_amount).sum();
        Ok(OrderHistory { user_id: user_id.to_string(), total_orders, orders })
    }

    /// Fetches a single order with its line items, or `None` if the order does not exist.
    pub async fn order_details(&self, order_id: &OrderId) -> Result<Option<OrderDetails>, OrderApiError> {
        let order = match self.db.fetch_order_by_order_id(order_id).await? {
            Some(order) => order,
            None => return Ok(None),
        };
        let items = self.db.fetch_order_items(order_id).await?;
        Ok(Some(OrderDetails { order, items }))
    }

    /// Fetches a single order without its line items, or `None` if the order does not exist.
    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderApiError> {
        self.db.fetch_order_by_order_id(order_id).await
    }
}
