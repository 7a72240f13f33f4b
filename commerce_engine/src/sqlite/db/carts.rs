use log::debug;
use sqlx::SqliteConnection;

pub async fn cart_exists(cart_id: &str, conn: &mut SqliteConnection) -> Result<bool, sqlx::Error> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT id FROM carts WHERE id = $1").bind(cart_id).fetch_optional(conn).await?;
    Ok(row.is_some())
}

/// Deletes the cart and, via the FK cascade, its items. Deleting a cart that is already gone is
/// not an error; settlement callbacks may fire more than once.
pub(crate) async fn delete_cart(cart_id: &str, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM carts WHERE id = $1").bind(cart_id).execute(conn).await?;
    if result.rows_affected() > 0 {
        debug!("🛒️ Cart {cart_id} deleted");
    }
    Ok(())
}
