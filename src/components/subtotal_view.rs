//! Subtotal Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Rendered only once a submission has succeeded
#[component]
pub fn SubtotalView() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.checkout().read().subtotal.map(|subtotal| view! {
            <section class="subtotal">
                <h2>"Subtotal"</h2>
                <p>{format!("Your Subtotal is {}", subtotal)}</p>
            </section>
        })
    }
}
