//! Workforce Admin Frontend Entry Point

mod app;
mod components;
mod context;
mod list;
mod pages;
mod platform;
mod store;

use app::App;
use leptos::prelude::*;
use workforce_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { tracing::Level::DEBUG } else { tracing::Level::INFO };
    if let Err(err) = browser_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }

    let config = AppConfig::from_overrides(option_env!("WORKFORCE_API_BASE_URL"), option_env!("WORKFORCE_PAGE_SIZE"));
    tracing::info!(api = %config.api_base_url, page_size = config.page_size, "starting");

    mount_to_body(move || view! { <App config=config /> });
}
