//! # Storefront payment server
//! This module hosts the HTTP surface for the storefront backend. It is responsible for:
//! Accepting order drafts from the storefront frontend and opening SSLCommerz payment sessions.
//! Receiving the gateway's success/fail/cancel callbacks and reconciling orders, stock and carts.
//! Serving order history and the promotional feature-image catalog.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/shop/order/...`: Order creation, gateway callbacks, history and details.
//! * `/api/common/feature/...`: Feature-image catalog management.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;

pub mod helpers;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
