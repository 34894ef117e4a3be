//! Catalog Commands
//!
//! Price list and offer lookups.

use crate::error::{CheckoutError, Endpoint};
use crate::models::{Item, Offer};
use super::HttpCheckoutClient;

impl HttpCheckoutClient {
    pub async fn fetch_prices(&self) -> Result<Vec<Item>, CheckoutError> {
        let items: Vec<Item> = self.get_json(Endpoint::Prices).await?;
        tracing::debug!(count = items.len(), "received price list");
        Ok(items)
    }

    pub async fn fetch_offers(&self) -> Result<Vec<Offer>, CheckoutError> {
        self.get_json(Endpoint::Offers).await
    }
}
