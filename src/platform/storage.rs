//! `window.sessionStorage` as a [`SessionStore`].

use workforce_core::SessionStore;

use super::js_error;

pub struct BrowserSessionStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserSessionStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("sessionStorage unavailable, session will not survive a reload");
        }
        Self { storage }
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!(key, error = %js_error(&err), "sessionStorage write failed");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
