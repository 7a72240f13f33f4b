use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use commerce_engine::{
    db_types::{AddressInfo, Order, OrderId, OrderItem, OrderStatusType, PaymentStatusType, User},
    traits::OrderFlowError,
    OrderFlowApi,
    OrdersApi,
};
use serde_json::json;
use shop_common::Money;
use sslcommerz_tools::SslCommerzApiError;

use super::helpers::{get_request, post_empty_request, post_request, test_urls};
use crate::{
    endpoint_tests::mocks::{MockShopDb, MockSslGateway},
    routes::{
        CancelPaymentRoute,
        CreateOrderRoute,
        FailPaymentRoute,
        OrderDetailsRoute,
        OrderListRoute,
        SuccessPaymentRoute,
    },
};

const GATEWAY_URL: &str = "https://sandbox.sslcommerz.com/EasyCheckOut/testcdeff1a";

fn test_order(payment_status: PaymentStatusType, order_status: OrderStatusType) -> Order {
    Order {
        id: 1,
        order_id: OrderId("cafebabe0123456789abcdef".into()),
        user_id: "alice".to_string(),
        cart_id: "cart-1".to_string(),
        address: AddressInfo {
            address: "12 Main St".to_string(),
            address2: None,
            city: "Dhaka".to_string(),
            state: "Dhaka".to_string(),
            postcode: "1215".to_string(),
            country: None,
            phone: "+8801700000000".to_string(),
        },
        payment_method: "sslcommerz".to_string(),
        payment_status,
        order_status,
        payment_url: String::new(),
        total_amount: Money::from_taka(1700),
        order_date: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
    }
}

fn test_user() -> User {
    User {
        id: "alice".to_string(),
        user_name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn draft_body() -> serde_json::Value {
    json!({
        "userId": "alice",
        "cartId": "cart-1",
        "products": [{"productId": "prod-a", "title": "Teapot", "quantity": 3, "price": 50000}],
        "address": "12 Main St",
        "city": "Dhaka",
        "state": "Dhaka",
        "postcode": "1215",
        "phone": "+8801700000000",
        "paymentMethod": "sslcommerz",
        "totalAmount": 170000
    })
}

//--------------------------------------------  Create order  --------------------------------------------------

#[actix_web::test]
async fn create_order_returns_the_gateway_url() {
    let _ = env_logger::try_init().ok();
    let res = post_request("/create", draft_body(), configure_create_ok).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, GATEWAY_URL);
}

fn configure_create_ok(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_user().returning(|_| Ok(Some(test_user())));
    db.expect_insert_order().returning(|draft| {
        // The frontend sends camelCase item keys; they must land in the draft intact.
        assert_eq!(draft.items[0].product_id, "prod-a");
        let mut order = test_order(PaymentStatusType::Pending, OrderStatusType::Pending);
        order.order_id = draft.order_id;
        Ok(order)
    });
    db.expect_set_payment_url().returning(|_, url| {
        let mut order = test_order(PaymentStatusType::Pending, OrderStatusType::Pending);
        order.payment_url = url.to_string();
        Ok(order)
    });
    let mut gateway = MockSslGateway::new();
    gateway.expect_create_session().returning(|_| Ok(GATEWAY_URL.to_string()));
    cfg.service(CreateOrderRoute::<MockShopDb, MockSslGateway>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(gateway))
        .app_data(web::Data::new(test_urls()));
}

#[actix_web::test]
async fn create_order_for_unknown_user_is_a_404() {
    let _ = env_logger::try_init().ok();
    let res = post_request("/create", draft_body(), configure_create_no_user).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("alice can not be found"), "Unexpected body: {}", res.body);
}

fn configure_create_no_user(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_user().returning(|_| Ok(None));
    let gateway = MockSslGateway::new();
    cfg.service(CreateOrderRoute::<MockShopDb, MockSslGateway>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(gateway))
        .app_data(web::Data::new(test_urls()));
}

#[actix_web::test]
async fn gateway_failure_surfaces_as_bad_gateway() {
    let _ = env_logger::try_init().ok();
    let res = post_request("/create", draft_body(), configure_create_gateway_down).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert!(res.body.contains("could not open a session"), "Unexpected body: {}", res.body);
}

fn configure_create_gateway_down(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_user().returning(|_| Ok(Some(test_user())));
    db.expect_insert_order()
        .returning(|_| Ok(test_order(PaymentStatusType::Pending, OrderStatusType::Pending)));
    // set_payment_url must NOT be called when the session open fails.
    let mut gateway = MockSslGateway::new();
    gateway
        .expect_create_session()
        .returning(|_| Err(SslCommerzApiError::SessionRejected("Store Credential Error".to_string())));
    cfg.service(CreateOrderRoute::<MockShopDb, MockSslGateway>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(gateway))
        .app_data(web::Data::new(test_urls()));
}

//------------------------------------------  Gateway callbacks  -----------------------------------------------

#[actix_web::test]
async fn success_callback_redirects_to_the_success_page() {
    let _ = env_logger::try_init().ok();
    let res = post_empty_request("/success/cafebabe0123456789abcdef", configure_success).await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(
        res.location.as_deref(),
        Some("https://shop.test/shop/success-payment?orderId=cafebabe0123456789abcdef&status=confirmed&amount=1700.00")
    );
}

fn configure_success(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_settle_order_paid()
        .returning(|_| Ok(test_order(PaymentStatusType::Paid, OrderStatusType::Confirmed)));
    cfg.service(SuccessPaymentRoute::<MockShopDb>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(test_urls()));
}

#[actix_web::test]
async fn replayed_success_callback_redirects_identically() {
    let _ = env_logger::try_init().ok();
    let res = post_empty_request("/success/cafebabe0123456789abcdef", configure_success_replay).await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(
        res.location.as_deref(),
        Some("https://shop.test/shop/success-payment?orderId=cafebabe0123456789abcdef&status=confirmed&amount=1700.00")
    );
}

fn configure_success_replay(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_settle_order_paid().returning(|_| Err(OrderFlowError::OrderModificationNoOp));
    db.expect_fetch_order_by_order_id()
        .returning(|_| Ok(Some(test_order(PaymentStatusType::Paid, OrderStatusType::Confirmed))));
    cfg.service(SuccessPaymentRoute::<MockShopDb>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(test_urls()));
}

#[actix_web::test]
async fn fail_callback_redirects_to_the_failed_page() {
    let _ = env_logger::try_init().ok();
    let res = post_empty_request("/fail/cafebabe0123456789abcdef", configure_fail).await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(
        res.location.as_deref(),
        Some("https://shop.test/shop/failed-payment?orderId=cafebabe0123456789abcdef&status=pending&amount=1700.00")
    );
}

fn configure_fail(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_reset_failed_order()
        .returning(|_| Ok(test_order(PaymentStatusType::Pending, OrderStatusType::Pending)));
    cfg.service(FailPaymentRoute::<MockShopDb>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(test_urls()));
}

#[actix_web::test]
async fn cancel_callback_redirects_to_the_account_page() {
    let _ = env_logger::try_init().ok();
    let res = post_empty_request("/cancel/cafebabe0123456789abcdef", configure_cancel).await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location.as_deref(), Some("https://shop.test/shop/account"));
}

fn configure_cancel(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_cancel_order()
        .returning(|_| Ok(test_order(PaymentStatusType::Cancelled, OrderStatusType::Cancelled)));
    cfg.service(CancelPaymentRoute::<MockShopDb>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(test_urls()));
}

#[actix_web::test]
async fn cancelling_a_paid_order_is_a_conflict() {
    let _ = env_logger::try_init().ok();
    let res = post_empty_request("/cancel/cafebabe0123456789abcdef", configure_cancel_paid).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
}

fn configure_cancel_paid(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_cancel_order().returning(|_| Err(OrderFlowError::OrderModificationForbidden));
    cfg.service(CancelPaymentRoute::<MockShopDb>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db)))
        .app_data(web::Data::new(test_urls()));
}

//--------------------------------------------  Order queries  -------------------------------------------------

#[actix_web::test]
async fn order_list_is_wrapped_in_the_data_envelope() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/list/alice", configure_list).await;
    assert_eq!(res.status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&res.body).expect("Invalid JSON body");
    assert_eq!(value["success"], true);
    assert_eq!(value["data"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(value["data"][0]["order_id"], "cafebabe0123456789abcdef");
}

fn configure_list(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_orders_for_user()
        .returning(|_| Ok(vec![test_order(PaymentStatusType::Paid, OrderStatusType::Confirmed)]));
    cfg.service(OrderListRoute::<MockShopDb>::new()).app_data(web::Data::new(OrdersApi::new(db)));
}

#[actix_web::test]
async fn order_list_for_a_user_with_no_orders_is_a_404() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/list/bob", configure_empty_list).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("No orders found!"), "Unexpected body: {}", res.body);
}

fn configure_empty_list(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_orders_for_user().returning(|_| Ok(vec![]));
    cfg.service(OrderListRoute::<MockShopDb>::new()).app_data(web::Data::new(OrdersApi::new(db)));
}

#[actix_web::test]
async fn order_details_include_the_line_items() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/details/cafebabe0123456789abcdef", configure_details).await;
    assert_eq!(res.status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&res.body).expect("Invalid JSON body");
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["order_id"], "cafebabe0123456789abcdef");
    assert_eq!(value["data"]["items"][0]["product_id"], "prod-a");
}

fn configure_details(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_order_by_order_id()
        .returning(|_| Ok(Some(test_order(PaymentStatusType::Paid, OrderStatusType::Confirmed))));
    db.expect_fetch_order_items().returning(|order_id| {
        Ok(vec![OrderItem {
            id: 1,
            order_id: order_id.clone(),
            product_id: "prod-a".to_string(),
            title: "Teapot".to_string(),
            quantity: 3,
            price: Money::from_taka(500),
        }])
    });
    cfg.service(OrderDetailsRoute::<MockShopDb>::new()).app_data(web::Data::new(OrdersApi::new(db)));
}

#[actix_web::test]
async fn order_details_for_a_missing_order_is_a_404() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/details/doesnotexist", configure_missing_details).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

fn configure_missing_details(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_order_by_order_id().returning(|_| Ok(None));
    cfg.service(OrderDetailsRoute::<MockShopDb>::new()).app_data(web::Data::new(OrdersApi::new(db)));
}
