//! A thin client for SSLCommerz's hosted-checkout ("EasyCheckout") API.
//!
//! The storefront only uses one call: opening a payment session. The gateway replies with a
//! hosted checkout URL that the shopper is redirected to; the outcome comes back later via the
//! callback URLs included in the session request.
mod api;
mod config;
mod data_objects;
mod error;

pub use api::{PaymentSessions, SslCommerzApi};
pub use config::SslCommerzConfig;
pub use data_objects::{PaymentSessionRequest, SessionResponse};
pub use error::SslCommerzApiError;
