//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::basket::CheckoutState;
use crate::checkout::{ServiceStatus, StateHandle};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog, basket, subtotal and error banner
    pub checkout: CheckoutState,
    /// Result of the health probe
    pub service: ServiceStatus,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl StateHandle for AppStore {
    fn apply<R>(&self, f: impl FnOnce(&mut CheckoutState) -> R) -> R {
        let field = self.checkout();
        let mut checkout = field.write();
        f(&mut checkout)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the service status shown in the status bar
pub fn store_set_service(store: &AppStore, status: ServiceStatus) {
    *store.service().write() = status;
}
