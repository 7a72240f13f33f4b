//! Small helpers for generating request-scoped identifiers.

use rand::Rng;

use crate::db_types::OrderId;

/// Generates a fresh 24-hex-character order identifier.
pub fn new_order_id() -> OrderId {
    let mut rng = rand::thread_rng();
    OrderId(format!("{:024x}", rng.gen::<u128>() >> 32))
}

/// Generates a fresh gateway transaction identifier. A new one must be generated for every
/// payment-session request; transaction ids are never shared between orders.
pub fn new_transaction_id() -> String {
    let mut rng = rand::thread_rng();
    format!("{:032x}", rng.gen::<u128>())
}
