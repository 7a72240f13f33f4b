use commerce_engine::{
    db_types::{Order, User},
    helpers::new_transaction_id,
};
use shop_common::BDT_CURRENCY_CODE;
use sslcommerz_tools::PaymentSessionRequest;

use crate::config::UrlConfig;

/// Builds the gateway session request for a freshly drafted order.
///
/// The transaction id is generated fresh on every call; retrying a create request opens a new
/// session rather than reusing a stale one. The callback URLs carry the order id so the gateway's
/// redirect POSTs land on the right order.
pub fn build_session_request(order: &Order, user: &User, urls: &UrlConfig) -> PaymentSessionRequest {
    let backend = urls.backend_url.trim_end_matches('/');
    let order_id = order.order_id.as_str();
    let address = &order.address;
    PaymentSessionRequest {
        total_amount: order.total_amount.to_decimal_string(),
        currency: BDT_CURRENCY_CODE.to_string(),
        tran_id: new_transaction_id(),
        success_url: format!("{backend}/api/shop/order/success/{order_id}"),
        fail_url: format!("{backend}/api/shop/order/fail/{order_id}"),
        cancel_url: format!("{backend}/api/shop/order/cancel/{order_id}"),
        ipn_url: None,
        shipping_method: "Courier".to_string(),
        product_name: "Storefront order".to_string(),
        product_category: "General".to_string(),
        product_profile: "general".to_string(),
        cus_name: user.user_name.clone(),
        cus_email: user.email.clone(),
        cus_add1: address.address.clone(),
        cus_add2: address.address2.clone(),
        cus_city: address.city.clone(),
        cus_state: address.state.clone(),
        cus_postcode: address.postcode.clone(),
        cus_country: address.country.clone().unwrap_or_else(|| "Bangladesh".to_string()),
        cus_phone: address.phone.clone(),
        ship_name: user.user_name.clone(),
        ship_add1: address.address.clone(),
        ship_add2: address.address2.clone(),
        ship_city: address.city.clone(),
        ship_state: address.state.clone(),
        ship_postcode: address.postcode.clone(),
        ship_country: address.country.clone().unwrap_or_else(|| "Bangladesh".to_string()),
    }
}

/// The landing page for a settled order.
pub fn success_redirect(order: &Order, urls: &UrlConfig) -> String {
    format!(
        "{}/shop/success-payment?orderId={}&status=confirmed&amount={}",
        urls.frontend_url.trim_end_matches('/'),
        order.order_id.as_str(),
        order.total_amount.to_decimal_string()
    )
}

/// The landing page for a failed payment attempt. The order stays pending so the shopper can retry.
pub fn failed_redirect(order: &Order, urls: &UrlConfig) -> String {
    format!(
        "{}/shop/failed-payment?orderId={}&status=pending&amount={}",
        urls.frontend_url.trim_end_matches('/'),
        order.order_id.as_str(),
        order.total_amount.to_decimal_string()
    )
}

/// Cancellation lands on the account page rather than a payment status page.
pub fn cancel_redirect(urls: &UrlConfig) -> String {
    format!("{}/shop/account", urls.frontend_url.trim_end_matches('/'))
}
