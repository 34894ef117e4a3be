//! Checkout Errors
//!
//! Failures raised by the checkout service bindings, kept `Clone` so the
//! last one can sit in UI state and drive the error banner.

use std::fmt;
use thiserror::Error;

/// Checkout service endpoint a request was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Prices,
    Basket,
    Offers,
    Health,
}

impl Endpoint {
    /// Path relative to the service base URL
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Prices => "checkout/prices",
            Endpoint::Basket => "checkout/",
            Endpoint::Offers => "checkout/offers",
            Endpoint::Health => "checkout/checkhealth",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Endpoint::Prices => "Loading prices",
            Endpoint::Basket => "Submitting basket",
            Endpoint::Offers => "Loading offers",
            Endpoint::Health => "Checking service health",
        };
        f.write_str(action)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("{endpoint} failed: service responded with status {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("{endpoint} failed: {message}")]
    Network { endpoint: Endpoint, message: String },

    #[error("{endpoint} failed: unexpected response ({message})")]
    Decode { endpoint: Endpoint, message: String },

    #[error("{endpoint} failed: invalid URL ({message})")]
    InvalidUrl { endpoint: Endpoint, message: String },
}

impl CheckoutError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            CheckoutError::Status { endpoint, .. }
            | CheckoutError::Network { endpoint, .. }
            | CheckoutError::Decode { endpoint, .. }
            | CheckoutError::InvalidUrl { endpoint, .. } => *endpoint,
        }
    }

    pub fn network(endpoint: Endpoint, err: impl fmt::Display) -> Self {
        CheckoutError::Network { endpoint, message: err.to_string() }
    }

    pub fn decode(endpoint: Endpoint, err: impl fmt::Display) -> Self {
        CheckoutError::Decode { endpoint, message: err.to_string() }
    }
}
