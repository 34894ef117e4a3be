//! Basket Panel Component
//!
//! Shows the basket as JSON and submits it for pricing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::checkout;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BasketPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();
        spawn_local(async move {
            checkout::submit_basket(&client, &store).await;
        });
    };

    view! {
        <section class="basket">
            <h2>"Basket"</h2>
            <form on:submit=on_submit>
                <pre>{move || store.checkout().read().basket_json()}</pre>
                <button
                    type="submit"
                    disabled=move || store.checkout().read().basket.is_empty()
                >
                    "Submit Basket"
                </button>
            </form>
        </section>
    }
}
