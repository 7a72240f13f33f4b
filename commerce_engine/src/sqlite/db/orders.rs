use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrder, Order, OrderId, OrderItem, OrderStatusType, PaymentStatusType},
    traits::OrderFlowError,
};

/// Inserts a new order and its line items using the given connection. This is not atomic on its own;
/// callers embed it in a transaction and pass `&mut *tx` as the connection argument.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, OrderFlowError> {
    if fetch_order_by_order_id(&order.order_id, &mut *conn).await?.is_some() {
        return Err(OrderFlowError::OrderAlreadyExists(order.order_id));
    }
    let inserted: Order = sqlx::query_as(
        r#"
            INSERT INTO orders (
                order_id,
                user_id,
                cart_id,
                address,
                address2,
                city,
                state,
                postcode,
                country,
                phone,
                payment_method,
                total_amount,
                order_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *;
        "#,
    )
    .bind(order.order_id)
    .bind(order.user_id)
    .bind(order.cart_id)
    .bind(order.address.address)
    .bind(order.address.address2)
    .bind(order.address.city)
    .bind(order.address.state)
    .bind(order.address.postcode)
    .bind(order.address.country)
    .bind(order.address.phone)
    .bind(order.payment_method)
    .bind(order.total_amount)
    .bind(order.order_date)
    .fetch_one(&mut *conn)
    .await?;
    for item in order.items {
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, title, quantity, price) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(inserted.order_id.as_str())
        .bind(item.product_id)
        .bind(item.title)
        .bind(item.quantity)
        .bind(item.price)
        .execute(&mut *conn)
        .await?;
    }
    debug!("📝️ Order [{}] inserted with id {}", inserted.order_id, inserted.id);
    Ok(inserted)
}

/// Returns the order with the given `order_id`, if any.
pub async fn fetch_order_by_order_id(
    order_id: &OrderId,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, sqlx::Error> {
    let order =
        sqlx::query_as("SELECT * FROM orders WHERE order_id = $1").bind(order_id.as_str()).fetch_optional(conn).await?;
    Ok(order)
}

/// Returns the line items for the given order in draft sequence.
pub async fn fetch_order_items(order_id: &OrderId, conn: &mut SqliteConnection) -> Result<Vec<OrderItem>, sqlx::Error> {
    let items = sqlx::query_as("SELECT * FROM order_items WHERE order_id = $1 ORDER BY id ASC")
        .bind(order_id.as_str())
        .fetch_all(conn)
        .await?;
    Ok(items)
}

/// Returns all orders for the given user, newest first.
pub async fn fetch_orders_for_user(user_id: &str, conn: &mut SqliteConnection) -> Result<Vec<Order>, sqlx::Error> {
    let orders = sqlx::query_as("SELECT * FROM orders WHERE user_id = $1 ORDER BY order_date DESC")
        .bind(user_id)
        .fetch_all(conn)
        .await?;
    trace!("📝️ Fetched {} orders for user {user_id}", orders.len());
    Ok(orders)
}

/// Moves an order to a new payment/order status pair. The two statuses always transition together;
/// there is no state where one is terminal and the other pending.
pub(crate) async fn update_order_status(
    order_id: &OrderId,
    payment_status: PaymentStatusType,
    order_status: OrderStatusType,
    conn: &mut SqliteConnection,
) -> Result<Order, OrderFlowError> {
    let result: Option<Order> = sqlx::query_as(
        "UPDATE orders SET payment_status = $1, order_status = $2, updated_at = CURRENT_TIMESTAMP WHERE order_id = $3 \
         RETURNING *",
    )
    .bind(payment_status)
    .bind(order_status)
    .bind(order_id.as_str())
    .fetch_optional(conn)
    .await?;
    result.ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))
}

pub(crate) async fn set_payment_url(
    order_id: &OrderId,
    url: &str,
    conn: &mut SqliteConnection,
) -> Result<Order, OrderFlowError> {
    let result: Option<Order> = sqlx::query_as(
        "UPDATE orders SET payment_url = $1, updated_at = CURRENT_TIMESTAMP WHERE order_id = $2 RETURNING *",
    )
    .bind(url)
    .bind(order_id.as_str())
    .fetch_optional(conn)
    .await?;
    result.ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))
}

pub(crate) async fn clear_payment_url(order_id: &OrderId, conn: &mut SqliteConnection) -> Result<(), OrderFlowError> {
    sqlx::query("UPDATE orders SET payment_url = '' WHERE order_id = $1")
        .bind(order_id.as_str())
        .execute(conn)
        .await?;
    Ok(())
}
