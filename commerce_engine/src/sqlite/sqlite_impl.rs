//! `SqliteDatabase` is a concrete implementation of a storefront backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::db::{carts, db_url, features, new_pool, orders, products, users};
use crate::{
    db_types::{FeatureImage, NewOrder, Order, OrderId, OrderItem, OrderStatusType, PaymentStatusType, Product, User},
    traits::{FeatureApiError, FeatureCatalog, OrderApiError, OrderFlowError, OrderManagement, ShopDatabase},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API instance, connecting to the URL given in the `SFS_DATABASE_URL` environment
    /// variable.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        Self::new_with_url(&url, max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl ShopDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, OrderFlowError> {
        let mut conn = self.pool.acquire().await?;
        let user = users::fetch_user(user_id, &mut conn).await?;
        Ok(user)
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderFlowError> {
        let mut tx = self.pool.begin().await?;
        let order = orders::insert_order(order, &mut tx).await?;
        debug!("🗃️ Order [{}] has been saved in the DB with id {}", order.order_id, order.id);
        tx.commit().await?;
        Ok(order)
    }

    async fn set_payment_url(&self, order_id: &OrderId, url: &str) -> Result<Order, OrderFlowError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::set_payment_url(order_id, url, &mut conn).await?;
        trace!("🗃️ Gateway session URL attached to order [{order_id}]");
        Ok(order)
    }

    /// Settles an order after the gateway reports a successful payment. In a single atomic transaction,
    /// * the order is fetched and its status checked. A replayed callback returns `OrderModificationNoOp`; a
    ///   cancelled order returns `OrderModificationForbidden`.
    /// * stock for every line item is deducted. A missing product aborts the whole settlement.
    /// * the user's cart is deleted.
    /// * the order moves to `paid` / `confirmed` and the payment URL is cleared.
    async fn settle_order_paid(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let mut tx = self.pool.begin().await?;
        let order = orders::fetch_order_by_order_id(order_id, &mut tx)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))?;
        match order.payment_status {
            PaymentStatusType::Paid => {
                debug!("🗃️ Order [{order_id}] is already paid. No action to take");
                return Err(OrderFlowError::OrderModificationNoOp);
            },
            PaymentStatusType::Cancelled => {
                warn!("🗃️ Order [{order_id}] is cancelled and cannot be settled");
                return Err(OrderFlowError::OrderModificationForbidden);
            },
            PaymentStatusType::Pending => {},
        }
        let items = orders::fetch_order_items(order_id, &mut tx).await?;
        for item in &items {
            let product = products::adjust_stock(&item.product_id, -item.quantity, &mut tx).await?;
            if product.is_none() {
                error!("🗃️ Product {} on order [{order_id}] does not exist. Settlement aborted", item.product_id);
                return Err(OrderFlowError::ProductNotFound {
                    order_id: order_id.clone(),
                    product_id: item.product_id.clone(),
                });
            }
        }
        carts::delete_cart(&order.cart_id, &mut tx).await?;
        orders::clear_payment_url(order_id, &mut tx).await?;
        let order =
            orders::update_order_status(order_id, PaymentStatusType::Paid, OrderStatusType::Confirmed, &mut tx).await?;
        tx.commit().await?;
        debug!("🗃️ Order [{order_id}] is now paid. Stock and cart have been reconciled");
        Ok(order)
    }

    /// Handles a failed-payment callback. The order stays `pending` / `pending` so the user can try again, but the
    /// cart is still deleted, matching the settlement path.
    async fn reset_failed_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let mut tx = self.pool.begin().await?;
        let order = orders::fetch_order_by_order_id(order_id, &mut tx)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))?;
        if order.payment_status != PaymentStatusType::Pending {
            warn!("🗃️ Order [{order_id}] is {} and cannot be marked as failed", order.payment_status);
            return Err(OrderFlowError::OrderModificationForbidden);
        }
        carts::delete_cart(&order.cart_id, &mut tx).await?;
        let order =
            orders::update_order_status(order_id, PaymentStatusType::Pending, OrderStatusType::Pending, &mut tx)
                .await?;
        tx.commit().await?;
        Ok(order)
    }

    async fn cancel_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let mut tx = self.pool.begin().await?;
        let order = orders::fetch_order_by_order_id(order_id, &mut tx)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))?;
        match order.payment_status {
            PaymentStatusType::Cancelled => {
                debug!("🗃️ Order [{order_id}] is already cancelled. No action to take");
                return Err(OrderFlowError::OrderModificationNoOp);
            },
            PaymentStatusType::Paid => {
                warn!("🗃️ Order [{order_id}] is paid and cannot be cancelled via the gateway callback");
                return Err(OrderFlowError::OrderModificationForbidden);
            },
            PaymentStatusType::Pending => {},
        }
        carts::delete_cart(&order.cart_id, &mut tx).await?;
        orders::clear_payment_url(order_id, &mut tx).await?;
        let order =
            orders::update_order_status(order_id, PaymentStatusType::Cancelled, OrderStatusType::Cancelled, &mut tx)
                .await?;
        tx.commit().await?;
        Ok(order)
    }

    async fn close(&mut self) -> Result<(), OrderFlowError> {
        self.pool.close().await;
        Ok(())
    }
}

impl OrderManagement for SqliteDatabase {
    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::fetch_order_by_order_id(order_id, &mut conn).await?;
        Ok(order)
    }

    async fn fetch_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let items = orders::fetch_order_items(order_id, &mut conn).await?;
        Ok(items)
    }

    async fn fetch_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let orders = orders::fetch_orders_for_user(user_id, &mut conn).await?;
        Ok(orders)
    }

    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let product = products::fetch_product(product_id, &mut conn).await?;
        Ok(product)
    }

    async fn cart_exists(&self, cart_id: &str) -> Result<bool, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let exists = carts::cart_exists(cart_id, &mut conn).await?;
        Ok(exists)
    }
}

impl FeatureCatalog for SqliteDatabase {
    async fn insert_feature_image(&self, image_url: &str) -> Result<FeatureImage, FeatureApiError> {
        let mut conn = self.pool.acquire().await?;
        let image = features::insert_feature_image(image_url, &mut conn).await?;
        Ok(image)
    }

    async fn fetch_feature_images(&self) -> Result<Vec<FeatureImage>, FeatureApiError> {
        let mut conn = self.pool.acquire().await?;
        let images = features::fetch_feature_images(&mut conn).await?;
        Ok(images)
    }

    async fn delete_feature_image(&self, id: i64) -> Result<(), FeatureApiError> {
        let mut conn = self.pool.acquire().await?;
        features::delete_feature_image(id, &mut conn).await
    }
}
