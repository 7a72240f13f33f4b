use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_common::Money;
use sqlx::{FromRow, Type};
use thiserror::Error;

use crate::helpers::new_order_id;

//--------------------------------------   PaymentStatusType   -------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusType {
    /// No payment has been collected for the order yet.
    Pending,
    /// The gateway reported a successful payment.
    Paid,
    /// The payment attempt was cancelled at the gateway.
    Cancelled,
}

impl Display for PaymentStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatusType::Pending => write!(f, "pending"),
            PaymentStatusType::Paid => write!(f, "paid"),
            PaymentStatusType::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid status value: {0}")]
pub struct StatusConversionError(String);

impl FromStr for PaymentStatusType {
    type Err = StatusConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            s => Err(StatusConversionError(format!("Invalid payment status: {s}"))),
        }
    }
}

//--------------------------------------    OrderStatusType    -------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusType {
    /// The order is newly created and awaits the gateway's verdict.
    Pending,
    /// Payment was collected in full and stock has been adjusted.
    Confirmed,
    /// The order was cancelled at the gateway.
    Cancelled,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Pending => write!(f, "pending"),
            OrderStatusType::Confirmed => write!(f, "confirmed"),
            OrderStatusType::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for OrderStatusType {
    type Err = StatusConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            s => Err(StatusConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------        OrderId        -------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------      AddressInfo      -------------------------------------------------------
/// Shipping and billing address fields captured with the order draft. Stored flattened on the orders table and
/// forwarded to the payment gateway when a session is opened.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub postcode: String,
    #[serde(default)]
    pub country: Option<String>,
    pub phone: String,
}

//--------------------------------------        Order          -------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_id: OrderId,
    pub user_id: String,
    pub cart_id: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub address: AddressInfo,
    pub payment_method: String,
    pub payment_status: PaymentStatusType,
    pub order_status: OrderStatusType,
    /// The gateway's hosted checkout URL. Empty until a session is opened, and cleared again when the order
    /// reaches a terminal outcome.
    pub payment_url: String,
    pub total_amount: Money,
    pub order_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------      OrderItem        -------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: OrderId,
    pub product_id: String,
    pub title: String,
    pub quantity: i64,
    pub price: Money,
}

//--------------------------------------       NewOrder        -------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// A fresh order identifier, generated server-side at draft time.
    pub order_id: OrderId,
    pub user_id: String,
    /// The cart this order was drafted from. The cart must outlive the order until a terminal callback fires.
    pub cart_id: String,
    pub items: Vec<NewOrderItem>,
    pub address: AddressInfo,
    pub payment_method: String,
    pub total_amount: Money,
    pub order_date: DateTime<Utc>,
}

impl NewOrder {
    pub fn new(
        user_id: String,
        cart_id: String,
        address: AddressInfo,
        payment_method: String,
        total_amount: Money,
    ) -> Self {
        Self {
            order_id: new_order_id(),
            user_id,
            cart_id,
            items: Vec::new(),
            address,
            payment_method,
            total_amount,
            order_date: Utc::now(),
        }
    }

    pub fn with_items(mut self, items: Vec<NewOrderItem>) -> Self {
        self.items = items;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_id: String,
    pub title: String,
    pub quantity: i64,
    pub price: Money,
}

//--------------------------------------       Product         -------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Signed on purpose: the settle flow decrements without a floor check, so oversold stock shows up as a
    /// negative number rather than a hidden error.
    pub total_stock: i64,
}

//--------------------------------------        Cart           -------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------        User           -------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------     FeatureImage      -------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FeatureImage {
    pub id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
