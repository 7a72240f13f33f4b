use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewOrder, Order, OrderId, User},
    traits::{OrderFlowError, ShopDatabase},
};

/// `OrderFlowApi` is the primary API for the order/payment reconciliation flow. It handles order
/// creation and the three terminal outcomes reported by the payment gateway's callbacks.
pub struct OrderFlowApi<B> {
    db: B,
}

impl<B> Debug for OrderFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B> OrderFlowApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> OrderFlowApi<B>
where B: ShopDatabase
{
    /// Submit a new order to the engine.
    ///
    /// This should be a brand-new order drafted from a cart. The order is persisted in the
    /// pending/pending state with an empty payment URL; opening the gateway session and attaching the
    /// redirect URL are separate steps, so a gateway failure leaves a retryable pending order behind.
    pub async fn process_new_order(&self, order: NewOrder) -> Result<Order, OrderFlowError> {
        let order = self.db.insert_order(order).await?;
        debug!("🔄️📦️ Order [{}] created for user {} in state pending/pending", order.order_id, order.user_id);
        Ok(order)
    }

    /// Fetches the user record an order draft refers to, or fails with
    /// [`OrderFlowError::UserNotFound`]. Called before order creation so a draft against a missing
    /// user is rejected up front.
    pub async fn user_for_order(&self, user_id: &str) -> Result<User, OrderFlowError> {
        self.db.fetch_user(user_id).await?.ok_or_else(|| OrderFlowError::UserNotFound(user_id.to_string()))
    }

    /// Stores the gateway's hosted-checkout URL against the order once a payment session exists.
    pub async fn attach_payment_url(&self, order_id: &OrderId, url: &str) -> Result<Order, OrderFlowError> {
        let order = self.db.set_payment_url(order_id, url).await?;
        debug!("🔄️📦️ Order [{order_id}] now carries a payment URL");
        Ok(order)
    }

    /// Handle the gateway's success callback.
    ///
    /// Atomically decrements stock for every line item, deletes the originating cart and marks the
    /// order paid/confirmed. A replayed callback returns
    /// [`OrderFlowError::OrderModificationNoOp`] and leaves stock untouched.
    pub async fn confirm_paid(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let order = self.db.settle_order_paid(order_id).await?;
        info!("🔄️✅️ Order [{order_id}] settled: {} collected, stock adjusted, cart removed", order.total_amount);
        Ok(order)
    }

    /// Handle the gateway's failure callback. The order resets to pending/pending and remains
    /// re-enterable; the originating cart is removed.
    pub async fn mark_failed(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let order = self.db.reset_failed_order(order_id).await?;
        info!("🔄️⚠️ Order [{order_id}] payment failed; order reset to pending/pending");
        Ok(order)
    }

    /// Handle the gateway's cancellation callback. The order becomes cancelled/cancelled (terminal)
    /// and the originating cart is removed.
    pub async fn mark_cancelled(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let order = self.db.cancel_order(order_id).await?;
        info!("🔄️❌️ Order [{order_id}] cancelled");
        Ok(order)
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}
