//! Browser Platform Bindings
//!
//! Thin wrappers over the browser APIs the screens need. Like the rest of the
//! UI glue, these report failures as display strings.

mod files;
mod geolocation;
mod storage;

pub use files::read_attachment;
pub use geolocation::current_position;
pub use storage::BrowserSessionStore;

use wasm_bindgen::JsValue;

/// Full page reload, used after switching the active admin.
pub fn reload_page() {
    let Some(window) = web_sys::window() else { return };
    if let Err(err) = window.location().reload() {
        tracing::warn!(error = %js_error(&err), "page reload failed");
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
