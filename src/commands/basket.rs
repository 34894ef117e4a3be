//! Basket Commands
//!
//! Submits the basket and returns the service-computed total.

use crate::error::{CheckoutError, Endpoint};
use crate::models::{BasketItem, CheckoutReceipt};
use super::{read_json, HttpCheckoutClient};

impl HttpCheckoutClient {
    pub async fn submit_basket(&self, basket: &[BasketItem]) -> Result<CheckoutReceipt, CheckoutError> {
        let endpoint = Endpoint::Basket;
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%url, lines = basket.len(), "POST basket");

        // `.json()` also sets `Content-Type: application/json`
        let response = self
            .http
            .post(url)
            .json(basket)
            .send()
            .await
            .map_err(|e| CheckoutError::network(endpoint, e))?;
        read_json(endpoint, response).await
    }
}
