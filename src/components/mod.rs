//! UI Components
//!
//! Reusable Leptos components.

mod basket_panel;
mod catalog_list;
mod catalog_row;
mod error_banner;
mod status_bar;
mod subtotal_view;

pub use basket_panel::BasketPanel;
pub use catalog_list::CatalogList;
pub use catalog_row::CatalogRow;
pub use error_banner::ErrorBanner;
pub use status_bar::StatusBar;
pub use subtotal_view::SubtotalView;
