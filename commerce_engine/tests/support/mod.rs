//! Seeding helpers for the order-flow integration tests.

use commerce_engine::{
    db_types::{AddressInfo, NewOrder, NewOrderItem},
    test_utils::{prepare_test_env, random_db_path},
    SqliteDatabase,
};
use shop_common::Money;
use sqlx::SqlitePool;

pub async fn new_test_db() -> SqliteDatabase {
    let url = random_db_path();
    prepare_test_env(&url).await;
    SqliteDatabase::new_with_url(&url, 5).await.expect("Error creating database")
}

pub async fn seed_user(pool: &SqlitePool, id: &str) {
    sqlx::query("INSERT INTO users (id, user_name, email) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(format!("user-{id}"))
        .bind(format!("{id}@example.com"))
        .execute(pool)
        .await
        .expect("Error seeding user");
}

pub async fn seed_product(pool: &SqlitePool, id: &str, title: &str, stock: i64) {
    sqlx::query("INSERT INTO products (id, title, total_stock) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(title)
        .bind(stock)
        .execute(pool)
        .await
        .expect("Error seeding product");
}

pub async fn seed_cart(pool: &SqlitePool, id: &str, user_id: &str) {
    sqlx::query("INSERT INTO carts (id, user_id) VALUES ($1, $2)")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Error seeding cart");
}

pub async fn cart_exists(pool: &SqlitePool, id: &str) -> bool {
    let row: Option<(String,)> = sqlx::query_as("SELECT id FROM carts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .expect("Error querying cart");
    row.is_some()
}

pub async fn stock_for(pool: &SqlitePool, product_id: &str) -> i64 {
    let (stock,): (i64,) = sqlx::query_as("SELECT total_stock FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .expect("Error querying stock");
    stock
}

pub fn test_address() -> AddressInfo {
    AddressInfo {
        address: "12 Kazi Nazrul Islam Ave".to_string(),
        address2: None,
        city: "Dhaka".to_string(),
        state: "Dhaka".to_string(),
        postcode: "1215".to_string(),
        country: Some("Bangladesh".to_string()),
        phone: "+8801700000000".to_string(),
    }
}

pub fn draft_order(user_id: &str, cart_id: &str, items: Vec<NewOrderItem>) -> NewOrder {
    let total = items.iter().map(|i| i.price * i.quantity).sum();
    NewOrder::new(user_id.to_string(), cart_id.to_string(), test_address(), "sslcommerz".to_string(), total)
        .with_items(items)
}

pub fn item(product_id: &str, title: &str, quantity: i64, price: Money) -> NewOrderItem {
    NewOrderItem { product_id: product_id.to_string(), title: title.to_string(), quantity, price }
}
