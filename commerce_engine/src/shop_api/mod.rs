mod features_api;
mod order_flow_api;
mod orders_api;

pub use features_api::FeaturesApi;
pub use order_flow_api::OrderFlowApi;
pub use orders_api::OrdersApi;
