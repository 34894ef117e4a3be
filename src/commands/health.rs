//! Health Commands

use crate::error::{CheckoutError, Endpoint};
use crate::models::HealthStatus;
use super::HttpCheckoutClient;

impl HttpCheckoutClient {
    pub async fn fetch_health(&self) -> Result<HealthStatus, CheckoutError> {
        self.get_json(Endpoint::Health).await
    }
}
