//! Checkout Flows
//!
//! Async interactions with the checkout service. Each flow awaits the
//! service and then applies the outcome to state through a [`StateHandle`],
//! so the same code drives the reactive store and plain test state.

use crate::basket::CheckoutState;
use crate::commands::CheckoutApi;

/// Mutable access to checkout state between awaits
pub trait StateHandle {
    fn apply<R>(&self, f: impl FnOnce(&mut CheckoutState) -> R) -> R;
}

/// Health of the checkout service as shown in the status bar
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Online(String),
    Offline(String),
}

impl ServiceStatus {
    pub fn label(&self) -> String {
        match self {
            ServiceStatus::Unknown => "Connecting...".to_string(),
            ServiceStatus::Online(message) => message.clone(),
            ServiceStatus::Offline(reason) => format!("Offline: {}", reason),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "service-status unknown",
            ServiceStatus::Online(_) => "service-status online",
            ServiceStatus::Offline(_) => "service-status offline",
        }
    }
}

/// Fetch the price list, then the offers.
///
/// A price failure leaves the catalog as it was and is recorded for the
/// error banner. Offers are optional; their failure is only logged.
pub async fn load_catalog<A, S>(api: &A, state: &S)
where
    A: CheckoutApi + ?Sized,
    S: StateHandle,
{
    match api.get_prices().await {
        Ok(items) => {
            tracing::info!(count = items.len(), "catalog loaded");
            state.apply(|s| {
                s.set_items(items);
                s.dismiss_error();
            });
        }
        Err(err) => {
            tracing::warn!(error = %err, "catalog load failed");
            state.apply(|s| s.record_error(err));
        }
    }

    match api.get_offers().await {
        Ok(offers) => state.apply(|s| s.set_offers(offers)),
        Err(err) => tracing::warn!(error = %err, "offers unavailable, showing catalog without them"),
    }
}

/// Send the basket for pricing.
///
/// Does nothing when the basket is empty. On success the subtotal is stored
/// and the basket cleared; on failure both are left untouched.
pub async fn submit_basket<A, S>(api: &A, state: &S)
where
    A: CheckoutApi + ?Sized,
    S: StateHandle,
{
    let Some(basket) = state.apply(|s| s.pending_submission()) else {
        tracing::debug!("basket empty, nothing to submit");
        return;
    };

    match api.post_basket(&basket).await {
        Ok(receipt) => {
            tracing::info!(total = receipt.total, lines = basket.len(), "basket priced");
            state.apply(|s| s.complete_submission(&receipt));
        }
        Err(err) => {
            tracing::warn!(error = %err, "basket submission failed");
            state.apply(|s| s.record_error(err));
        }
    }
}

pub async fn check_service<A: CheckoutApi + ?Sized>(api: &A) -> ServiceStatus {
    match api.check_health().await {
        Ok(health) => ServiceStatus::Online(health.message),
        Err(err) => {
            tracing::warn!(error = %err, "checkout service health check failed");
            ServiceStatus::Offline(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CheckoutError, Endpoint};
    use crate::models::{BasketItem, CheckoutReceipt, HealthStatus, Item, Offer};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    impl StateHandle for RefCell<CheckoutState> {
        fn apply<R>(&self, f: impl FnOnce(&mut CheckoutState) -> R) -> R {
            f(&mut self.borrow_mut())
        }
    }

    fn status_error(endpoint: Endpoint, status: u16) -> CheckoutError {
        CheckoutError::Status { endpoint, status }
    }

    fn line(code: &str, quant: u32) -> BasketItem {
        BasketItem { code: code.to_string(), quant }
    }

    /// Canned responses plus a record of what was requested
    struct FakeApi {
        prices: Result<Vec<Item>, CheckoutError>,
        offers: Result<Vec<Offer>, CheckoutError>,
        receipt: Result<CheckoutReceipt, CheckoutError>,
        health: Result<HealthStatus, CheckoutError>,
        calls: Cell<usize>,
        submitted: RefCell<Vec<Vec<BasketItem>>>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                prices: Ok(vec![
                    Item { code: "A".to_string(), price: 5.0 },
                    Item { code: "B".to_string(), price: 5.5 },
                ]),
                offers: Ok(vec![Offer { code: "A".to_string(), amount: 3, offer_price: 12.0 }]),
                receipt: Ok(CheckoutReceipt { message: Some("Checkout complete".to_string()), total: 15.5 }),
                health: Ok(HealthStatus { message: "Checkout Route is working".to_string() }),
                calls: Cell::new(0),
                submitted: RefCell::new(Vec::new()),
            }
        }

        fn count(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[async_trait(?Send)]
    impl CheckoutApi for FakeApi {
        async fn get_prices(&self) -> Result<Vec<Item>, CheckoutError> {
            self.count();
            self.prices.clone()
        }

        async fn post_basket(&self, basket: &[BasketItem]) -> Result<CheckoutReceipt, CheckoutError> {
            self.count();
            self.submitted.borrow_mut().push(basket.to_vec());
            self.receipt.clone()
        }

        async fn get_offers(&self) -> Result<Vec<Offer>, CheckoutError> {
            self.count();
            self.offers.clone()
        }

        async fn check_health(&self) -> Result<HealthStatus, CheckoutError> {
            self.count();
            self.health.clone()
        }
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let api = FakeApi::new();
        let state = RefCell::new(CheckoutState::default());

        load_catalog(&api, &state).await;

        let state = state.into_inner();
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].code, "B");
        assert_eq!(state.offers.len(), 1);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_failed_price_fetch_leaves_items_empty() {
        let mut api = FakeApi::new();
        api.prices = Err(status_error(Endpoint::Prices, 500));
        let state = RefCell::new(CheckoutState::default());

        load_catalog(&api, &state).await;

        let state = state.into_inner();
        assert!(state.items.is_empty());
        assert_eq!(state.error, Some(status_error(Endpoint::Prices, 500)));
    }

    #[tokio::test]
    async fn test_failed_offers_are_not_fatal() {
        let mut api = FakeApi::new();
        api.offers = Err(status_error(Endpoint::Offers, 404));
        let state = RefCell::new(CheckoutState::default());

        load_catalog(&api, &state).await;

        let state = state.into_inner();
        assert_eq!(state.items.len(), 2);
        assert!(state.offers.is_empty());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_retry_after_failed_load_clears_error() {
        let mut api = FakeApi::new();
        api.prices = Err(status_error(Endpoint::Prices, 502));
        let state = RefCell::new(CheckoutState::default());
        load_catalog(&api, &state).await;
        assert!(state.borrow().error.is_some());

        api.prices = Ok(vec![Item { code: "C".to_string(), price: 2.0 }]);
        load_catalog(&api, &state).await;

        let state = state.into_inner();
        assert_eq!(state.items.len(), 1);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_empty_basket_makes_no_request() {
        let api = FakeApi::new();
        let initial = CheckoutState { subtotal: Some(9.0), ..Default::default() };
        let state = RefCell::new(initial.clone());

        submit_basket(&api, &state).await;

        assert_eq!(api.calls.get(), 0);
        assert_eq!(state.into_inner(), initial);
    }

    #[tokio::test]
    async fn test_submit_basket_end_to_end() {
        let api = FakeApi::new();
        let state = RefCell::new(CheckoutState::default());
        state.apply(|s| {
            s.set_quantity("A", "2");
            s.add_to_basket("A");
            s.set_quantity("B", "1");
            s.add_to_basket("B");
        });

        submit_basket(&api, &state).await;

        assert_eq!(api.submitted.borrow().as_slice(), &[vec![line("A", 2), line("B", 1)]]);
        let state = state.into_inner();
        assert_eq!(state.subtotal, Some(15.5));
        assert!(state.basket.is_empty());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_basket_and_subtotal() {
        let mut api = FakeApi::new();
        api.receipt = Err(status_error(Endpoint::Basket, 500));
        let state = RefCell::new(CheckoutState {
            basket: vec![line("A", 1)],
            subtotal: Some(3.0),
            ..Default::default()
        });

        submit_basket(&api, &state).await;

        let state = state.into_inner();
        assert_eq!(state.basket, vec![line("A", 1)]);
        assert_eq!(state.subtotal, Some(3.0));
        assert_eq!(state.error, Some(status_error(Endpoint::Basket, 500)));
    }

    #[tokio::test]
    async fn test_check_service() {
        let mut api = FakeApi::new();
        assert_eq!(
            check_service(&api).await,
            ServiceStatus::Online("Checkout Route is working".to_string())
        );

        api.health = Err(CheckoutError::network(Endpoint::Health, "connection refused"));
        let status = check_service(&api).await;
        assert!(matches!(status, ServiceStatus::Offline(_)));
        assert_eq!(status.css_class(), "service-status offline");
        assert_eq!(status.label(), "Offline: Checking service health failed: connection refused");
    }
}
