//! Catalog Row Component
//!
//! Price, offer hint, quantity input and "Add" for a single item.

use leptos::prelude::*;

use crate::checkout::StateHandle;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single item row with its own add-to-basket form
#[component]
pub fn CatalogRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let label = format!("{}: {}", item.code, item.price);
    let code = StoredValue::new(item.code);

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let code = code.get_value();
        if store.apply(|s| s.add_to_basket(&code)) {
            tracing::debug!(%code, "added to basket");
        }
    };

    let offer_hint = move || {
        code.with_value(|code| store.checkout().read().offer_for(code).map(|offer| offer.describe()))
    };

    view! {
        <li class="catalog-row">
            <form on:submit=on_add>
                <span class="item-label">{label}</span>
                {move || offer_hint().map(|hint| view! { <span class="offer-hint">{hint}</span> })}
                <input
                    type="number"
                    min="0"
                    placeholder="0"
                    prop:value=move || code.with_value(|code| store.checkout().read().pending_display(code))
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        let code = code.get_value();
                        store.apply(|s| s.set_quantity(&code, &raw));
                    }
                />
                <button type="submit">"Add"</button>
            </form>
        </li>
    }
}
