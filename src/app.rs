//! Checkout Frontend App
//!
//! Main application component: catalog, basket and subtotal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::checkout;
use crate::components::{BasketPanel, CatalogList, ErrorBanner, StatusBar, SubtotalView};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::{store_set_service, AppState};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);
    provide_context(ctx);

    // Probe the service once on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let status = checkout::check_service(&client).await;
            store_set_service(&store, status);
        });
    });

    // Load the catalog on mount and on every retry
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        tracing::info!(trigger, "loading catalog");
        let client = ctx.client();
        spawn_local(async move {
            checkout::load_catalog(&client, &store).await;
        });
    });

    view! {
        <div class="app-layout">
            <StatusBar />

            <main class="main-content">
                <ErrorBanner />

                <CatalogList />

                <BasketPanel />

                <SubtotalView />
            </main>
        </div>
    }
}
