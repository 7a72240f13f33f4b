use std::fmt::Display;

use commerce_engine::db_types::{AddressInfo, NewOrder, NewOrderItem};
use serde::{Deserialize, Serialize};
use shop_common::Money;

/// The order draft posted by the storefront frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub cart_id: String,
    pub products: Vec<NewOrderItem>,
    #[serde(flatten)]
    pub address: AddressInfo,
    pub payment_method: String,
    pub total_amount: Money,
}

impl CreateOrderRequest {
    pub fn into_new_order(self) -> NewOrder {
        NewOrder::new(self.user_id, self.cart_id, self.address, self.payment_method, self.total_amount)
            .with_items(self.products)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// The frontend's standard `{success, data}` envelope for queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFeatureRequest {
    pub image_url: String,
}

/// Deleting a feature image removes both the catalog record and the hosted asset, so the request
/// carries the stored URL alongside the record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFeatureRequest {
    pub id: i64,
    pub image_url: String,
}
