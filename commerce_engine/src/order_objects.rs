//! API-facing composites built from the raw database types.

use serde::{Deserialize, Serialize};
use shop_common::Money;

use crate::db_types::{Order, OrderItem};

/// A single order together with its line items, as returned by the details query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// The result of a user's order-history query. Orders are sorted by order date, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistory {
    pub user_id: String,
    pub total_orders: Money,
    pub orders: Vec<Order>,
}
