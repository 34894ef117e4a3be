//! Catalog List Component
//!
//! One row per priced item, in the order the service returned them.

use leptos::prelude::*;

use crate::components::CatalogRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CatalogList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="catalog">
            <h1>"Items"</h1>
            <ul class="catalog-list">
                <For
                    each=move || store.checkout().read().items.clone()
                    key=|item| item.code.clone()
                    children=move |item| view! { <CatalogRow item=item /> }
                />
            </ul>
        </section>
    }
}
