use cloudinary_tools::{CloudinaryApiError, HostedImages};
use commerce_engine::{
    db_types::{FeatureImage, NewOrder, Order, OrderId, OrderItem, Product, User},
    traits::{FeatureApiError, FeatureCatalog, OrderApiError, OrderFlowError, OrderManagement, ShopDatabase},
};
use mockall::mock;
use sslcommerz_tools::{PaymentSessionRequest, PaymentSessions, SslCommerzApiError};

mock! {
    pub ShopDb {}
    impl Clone for ShopDb {
        fn clone(&self) -> Self;
    }
    impl ShopDatabase for ShopDb {
        fn url(&self) -> &'static str;
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderFlowError>;
        async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, OrderFlowError>;
        async fn set_payment_url(&self, order_id: &OrderId, url: &str) -> Result<Order, OrderFlowError>;
        async fn settle_order_paid(&self, order_id: &OrderId) -> Result<Order, OrderFlowError>;
        async fn reset_failed_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError>;
        async fn cancel_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError>;
        async fn close(&mut self) -> Result<(), OrderFlowError>;
    }
    impl OrderManagement for ShopDb {
        async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderApiError>;
        async fn fetch_order_items(&self, order_id: &OrderId) -> Result<Vec<OrderItem>, OrderApiError>;
        async fn fetch_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, OrderApiError>;
        async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, OrderApiError>;
        async fn cart_exists(&self, cart_id: &str) -> Result<bool, OrderApiError>;
    }
}

mock! {
    pub FeatureDb {}
    impl Clone for FeatureDb {
        fn clone(&self) -> Self;
    }
    impl FeatureCatalog for FeatureDb {
        async fn insert_feature_image(&self, image_url: &str) -> Result<FeatureImage, FeatureApiError>;
        async fn fetch_feature_images(&self) -> Result<Vec<FeatureImage>, FeatureApiError>;
        async fn delete_feature_image(&self, id: i64) -> Result<(), FeatureApiError>;
    }
}

mock! {
    pub SslGateway {}
    impl PaymentSessions for SslGateway {
        async fn create_session(&self, request: PaymentSessionRequest) -> Result<String, SslCommerzApiError>;
    }
}

mock! {
    pub ImageHost {}
    impl HostedImages for ImageHost {
        async fn destroy_image(&self, image_url: &str) -> Result<(), CloudinaryApiError>;
    }
}
