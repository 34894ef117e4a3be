//! Checkout Frontend Entry Point

mod app;
mod basket;
mod checkout;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("[APP] Invalid configuration: {}", err).into());
            return;
        }
    };

    if let Err(err) = console_logger::init(&config.log_filter) {
        web_sys::console::warn_1(&format!("[APP] Logging disabled: {}", err).into());
    }
    tracing::info!(api_base = %config.api_base, "starting checkout UI");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
