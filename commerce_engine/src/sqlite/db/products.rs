use log::trace;
use sqlx::SqliteConnection;

use crate::db_types::Product;

pub async fn fetch_product(product_id: &str, conn: &mut SqliteConnection) -> Result<Option<Product>, sqlx::Error> {
    let product =
        sqlx::query_as("SELECT * FROM products WHERE id = $1").bind(product_id).fetch_optional(conn).await?;
    Ok(product)
}

/// Adjusts the stock level of a product by `delta` (negative to deduct). The column is signed and
/// the count is allowed to go below zero; oversold stock surfaces in reporting rather than
/// blocking settlement.
pub(crate) async fn adjust_stock(
    product_id: &str,
    delta: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Product>, sqlx::Error> {
    let product: Option<Product> =
        sqlx::query_as("UPDATE products SET total_stock = total_stock + $1 WHERE id = $2 RETURNING *")
            .bind(delta)
            .bind(product_id)
            .fetch_optional(conn)
            .await?;
    if let Some(p) = &product {
        trace!("🗃️ Stock for product {} adjusted by {delta} to {}", p.id, p.total_stock);
    }
    Ok(product)
}
