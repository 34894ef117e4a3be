//! Frontend Models
//!
//! Data structures matching the checkout service payloads.

use serde::{Deserialize, Serialize};

/// Catalog entry (matches `GET /checkout/prices`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub code: String,
    pub price: f64,
}

/// Basket line sent to `POST /checkout/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    pub code: String,
    pub quant: u32,
}

/// Multi-buy offer: `amount` units of `code` for `offer_price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub code: String,
    pub amount: u32,
    #[serde(rename = "offerprice")]
    pub offer_price: f64,
}

impl Offer {
    pub fn describe(&self) -> String {
        format!("{} for {}", self.amount, self.offer_price)
    }
}

/// Response to a basket submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    #[serde(default)]
    pub message: Option<String>,
    pub total: f64,
}

/// Response from the health endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}
