//! # Database management and control.
//!
//! This module defines the interface contracts that payment-engine database *backends* must implement.
//!
//! * [`ShopDatabase`] defines the write-side behaviour: creating orders and driving the reconciliation
//!   state machine (settle, reset, cancel) atomically.
//! * [`OrderManagement`] provides read-side queries over orders, products and carts.
//! * [`FeatureCatalog`] persists the feature-image records used by the storefront's promo carousel.
mod feature_catalog;
mod order_management;
mod shop_database;

pub use feature_catalog::{FeatureApiError, FeatureCatalog};
pub use order_management::{OrderApiError, OrderManagement};
pub use shop_database::{OrderFlowError, ShopDatabase};
