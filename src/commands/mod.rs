//! Checkout Service Wrappers
//!
//! Frontend bindings to the checkout service HTTP API, organized by domain.

mod basket;
mod catalog;
mod health;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::{CheckoutError, Endpoint};
use crate::models::{BasketItem, CheckoutReceipt, HealthStatus, Item, Offer};

/// Operations the UI needs from the checkout service.
///
/// Futures are `?Send`: on wasm32 requests run on the browser event loop.
#[async_trait(?Send)]
pub trait CheckoutApi {
    async fn get_prices(&self) -> Result<Vec<Item>, CheckoutError>;
    async fn post_basket(&self, basket: &[BasketItem]) -> Result<CheckoutReceipt, CheckoutError>;
    async fn get_offers(&self) -> Result<Vec<Offer>, CheckoutError>;
    async fn check_health(&self) -> Result<HealthStatus, CheckoutError>;
}

/// `reqwest`-backed client (browser `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpCheckoutClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpCheckoutClient {
    /// `base` must end with `/` so endpoint paths resolve beneath it
    pub fn new(base: Url) -> Self {
        Self { http: reqwest::Client::new(), base }
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, CheckoutError> {
        self.base
            .join(endpoint.path())
            .map_err(|e| CheckoutError::InvalidUrl { endpoint, message: e.to_string() })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, CheckoutError> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CheckoutError::network(endpoint, e))?;
        read_json(endpoint, response).await
    }
}

#[async_trait(?Send)]
impl CheckoutApi for HttpCheckoutClient {
    async fn get_prices(&self) -> Result<Vec<Item>, CheckoutError> {
        self.fetch_prices().await
    }

    async fn post_basket(&self, basket: &[BasketItem]) -> Result<CheckoutReceipt, CheckoutError> {
        self.submit_basket(basket).await
    }

    async fn get_offers(&self) -> Result<Vec<Offer>, CheckoutError> {
        self.fetch_offers().await
    }

    async fn check_health(&self) -> Result<HealthStatus, CheckoutError> {
        self.fetch_health().await
    }
}

async fn read_json<T: DeserializeOwned>(
    endpoint: Endpoint,
    response: reqwest::Response,
) -> Result<T, CheckoutError> {
    ensure_success(endpoint, response.status())?;
    let body = response
        .bytes()
        .await
        .map_err(|e| CheckoutError::network(endpoint, e))?;
    decode(endpoint, &body)
}

/// Any non-2xx status is a failed request
fn ensure_success(endpoint: Endpoint, status: StatusCode) -> Result<(), CheckoutError> {
    if status.is_success() {
        Ok(())
    } else {
        tracing::warn!(%endpoint, status = status.as_u16(), "checkout service returned an error status");
        Err(CheckoutError::Status { endpoint, status: status.as_u16() })
    }
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &[u8]) -> Result<T, CheckoutError> {
    serde_json::from_slice(body).map_err(|e| CheckoutError::decode(endpoint, e))
}
