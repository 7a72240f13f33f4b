//! Storefront Commerce Engine
//!
//! This library contains the core order-management and payment-reconciliation logic for the storefront.
//! It is provider-agnostic: the HTTP server, the payment gateway client and the image host client all live
//! elsewhere and talk to this crate through narrow traits.
//!
//! The library is divided into two main sections:
//! 1. Database management and control. Currently SQLite is the only supported backend. You should never need
//!    to access the database directly; use the public APIs instead. The exception is the data types used in
//!    the database, which are defined in [`db_types`] and are public.
//! 2. The engine public API ([`OrderFlowApi`], [`OrdersApi`], [`FeaturesApi`]). These wrap any backend that
//!    implements the traits in [`traits`] and expose the order reconciliation flow, order queries and the
//!    feature-image catalog.
pub mod db_types;
pub mod helpers;
pub mod order_objects;
mod shop_api;
pub mod traits;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use shop_api::{FeaturesApi, OrderFlowApi, OrdersApi};
