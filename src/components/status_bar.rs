//! Status Bar Component
//!
//! App title plus the checkout service health indicator.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_app_store();

    let status_class = move || store.service().read().css_class();
    let status_label = move || store.service().read().label();

    view! {
        <header class="status-bar">
            <span class="status-bar-title">"Checkout"</span>
            <span class=status_class>{status_label}</span>
        </header>
    }
}
