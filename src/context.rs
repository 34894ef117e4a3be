//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpCheckoutClient;
use crate::config::Config;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the catalog - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the catalog - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<Config>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: Config) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of the catalog
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Client for the configured checkout service
    pub fn client(&self) -> HttpCheckoutClient {
        HttpCheckoutClient::new(self.config.with_value(|config| config.api_base.clone()))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
