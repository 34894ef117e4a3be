//! Error Banner Component
//!
//! Surfaces the last checkout failure with dismiss and retry actions.

use leptos::prelude::*;

use crate::checkout::StateHandle;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let dismiss = move |_| store.apply(|s| s.dismiss_error());
    let retry = move |_| {
        store.apply(|s| s.dismiss_error());
        ctx.reload();
    };

    move || {
        let (error, can_retry) = {
            let checkout = store.checkout().read();
            (checkout.error.clone(), checkout.can_reload_catalog())
        };
        error.map(|error| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{error.to_string()}</span>
                    <Show when=move || can_retry>
                        <button class="retry-btn" on:click=retry>"Retry"</button>
                    </Show>
                    <button class="dismiss-btn" title="Dismiss" on:click=dismiss>"×"</button>
                </div>
            }
        })
    }
}
