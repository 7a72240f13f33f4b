use serde::{Deserialize, Serialize};

/// The form payload for opening a v4 hosted-checkout session.
///
/// Field names follow the gateway's wire format exactly; the struct is serialized as
/// `application/x-www-form-urlencoded`. Store credentials are merged in by the client at send
/// time, so they never appear here.
#[derive(Debug, Clone, Serialize, Default)]
pub struct PaymentSessionRequest {
    /// Total amount in the major currency unit, rendered with two decimal places.
    pub total_amount: String,
    pub currency: String,
    /// Fresh transaction id. A new one must be generated for every session request.
    pub tran_id: String,
    pub success_url: String,
    pub fail_url: String,
    pub cancel_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipn_url: Option<String>,
    pub shipping_method: String,
    pub product_name: String,
    pub product_category: String,
    pub product_profile: String,
    pub cus_name: String,
    pub cus_email: String,
    pub cus_add1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cus_add2: Option<String>,
    pub cus_city: String,
    pub cus_state: String,
    pub cus_postcode: String,
    pub cus_country: String,
    pub cus_phone: String,
    pub ship_name: String,
    pub ship_add1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_add2: Option<String>,
    pub ship_city: String,
    pub ship_state: String,
    pub ship_postcode: String,
    pub ship_country: String,
}

/// The gateway's response to a session request. Only the fields the storefront acts on are
/// deserialized; everything else in the (large) response body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    /// "SUCCESS" or "FAILED".
    pub status: String,
    #[serde(default)]
    pub failedreason: String,
    #[serde(default)]
    pub sessionkey: String,
    /// The hosted checkout page the shopper must be redirected to. Absent when the request failed.
    #[serde(rename = "GatewayPageURL", default)]
    pub gateway_page_url: String,
}

impl SessionResponse {
    pub fn is_success(&self) -> bool {
        self.status == "SUCCESS" && !self.gateway_page_url.is_empty()
    }
}
