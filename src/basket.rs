//! Basket State
//!
//! Catalog, pending quantities, basket and subtotal, with every user action
//! expressed as a transition on [`CheckoutState`].

use std::collections::HashMap;

use crate::error::{CheckoutError, Endpoint};
use crate::models::{BasketItem, CheckoutReceipt, Item, Offer};

/// Parse quantity input the way a browser `parseInt(value)` does for
/// decimal text.
///
/// Leading whitespace and a sign are accepted, digits are read up to the
/// first non-digit, and input with no leading digits becomes 0. A number
/// input never yields a `0x` prefix, so hex auto-detection is not handled.
pub fn parse_quantity(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit - b'0'));
    }

    if !seen_digit {
        return 0;
    }
    if negative { -value } else { value }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutState {
    /// Price list from the checkout service
    pub items: Vec<Item>,
    /// Multi-buy offers, display only
    pub offers: Vec<Offer>,
    /// Pending input per item code (missing = 0)
    pub quantities: HashMap<String, i64>,
    /// Unique codes, every `quant` > 0
    pub basket: Vec<BasketItem>,
    /// Total from the last successful submission
    pub subtotal: Option<f64>,
    /// Last failure not yet dismissed
    pub error: Option<CheckoutError>,
}

impl CheckoutState {
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn set_offers(&mut self, offers: Vec<Offer>) {
        self.offers = offers;
    }

    pub fn offer_for(&self, code: &str) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.code == code)
    }

    pub fn pending_quantity(&self, code: &str) -> i64 {
        self.quantities.get(code).copied().unwrap_or(0)
    }

    /// Input text for a row; zero shows as empty so the placeholder is visible
    pub fn pending_display(&self, code: &str) -> String {
        match self.pending_quantity(code) {
            0 => String::new(),
            quantity => quantity.to_string(),
        }
    }

    pub fn set_quantity(&mut self, code: &str, raw: &str) {
        self.quantities.insert(code.to_string(), parse_quantity(raw));
    }

    /// Move the pending quantity for `code` into the basket.
    ///
    /// Returns `false` (and changes nothing) when the pending quantity is not positive.
    pub fn add_to_basket(&mut self, code: &str) -> bool {
        let quantity = self.pending_quantity(code);
        if quantity <= 0 {
            return false;
        }
        let quant = u32::try_from(quantity).unwrap_or(u32::MAX);

        match self.basket.iter_mut().find(|line| line.code == code) {
            Some(line) => line.quant = line.quant.saturating_add(quant),
            None => self.basket.push(BasketItem { code: code.to_string(), quant }),
        }

        self.quantities.insert(code.to_string(), 0);
        true
    }

    /// Snapshot of the basket to submit, `None` when there is nothing to send
    pub fn pending_submission(&self) -> Option<Vec<BasketItem>> {
        if self.basket.is_empty() {
            None
        } else {
            Some(self.basket.clone())
        }
    }

    pub fn complete_submission(&mut self, receipt: &CheckoutReceipt) {
        self.subtotal = Some(receipt.total);
        self.basket.clear();
        self.error = None;
    }

    pub fn record_error(&mut self, error: CheckoutError) {
        self.error = Some(error);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Reloading helps while the price list is missing or failed to load
    pub fn can_reload_catalog(&self) -> bool {
        self.items.is_empty()
            || self.error.as_ref().is_some_and(|e| e.endpoint() == Endpoint::Prices)
    }

    /// Basket rendered as two-space indented JSON
    pub fn basket_json(&self) -> String {
        serde_json::to_string_pretty(&self.basket).unwrap_or_else(|_| "[]".to_string())
    }
}
