//! Application Context
//!
//! Shared state provided via Leptos Context API: the session snapshot, the
//! active screen, the reload trigger and the notification helpers.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::domain::LoginData;
use workforce_core::{ApiClient, ApiError, AppConfig, ReqwestTransport, Session, TenantContext};

use crate::pages::Screen;
use crate::platform::{self, BrowserSessionStore};
use crate::store::{store_clear_tenant_data, store_dismiss_toast, store_push_toast, AppStore, ToastKind};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session snapshot, refreshed on sign-in/out and admin selection
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    /// Trigger to re-fetch every visible list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch every visible list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Screen shown in the main column - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    config: StoredValue<AppConfig>,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: AppConfig, session: Session, store: AppStore) -> Self {
        let (session, set_session) = signal(session);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (screen, set_screen) = signal(Screen::default());
        Self {
            session,
            set_session,
            reload_trigger,
            set_reload_trigger,
            screen,
            set_screen,
            config: StoredValue::new(config),
            store,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Trigger a re-fetch of visible lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn show(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    // ========================
    // Tenant
    // ========================

    /// Client bound to the current session. Reads the session untracked.
    pub fn client(&self) -> Result<ApiClient, ApiError> {
        let tenant = self.session.with_untracked(TenantContext::from_session)?;
        let transport = ReqwestTransport::new(&self.config.with_value(|c| c.api_base_url.clone()));
        Ok(ApiClient::new(transport, tenant))
    }

    /// Whether requests can be scoped to an admin (tracked).
    pub fn has_tenant(&self) -> bool {
        self.session.with(|s| TenantContext::from_session(s).is_ok_and(|t| t.has_admin()))
    }

    pub fn is_organization(&self) -> bool {
        self.session.with(|s| s.role.is_organization())
    }

    // ========================
    // Session
    // ========================

    pub fn sign_in(&self, login: &LoginData) {
        let session = Session::from_login(login);
        session.persist(&BrowserSessionStore::open());
        tracing::info!(role = session.role.as_str(), "signed in");
        self.set_screen.set(Screen::default());
        self.set_session.set(session);
    }

    pub fn sign_out(&self) {
        Session::clear(&BrowserSessionStore::open());
        store_clear_tenant_data(&self.store);
        self.set_session.set(Session::default());
        tracing::info!("signed out");
    }

    /// Remember the chosen admin without reloading (first-load auto-pick).
    pub fn adopt_admin(&self, admin_id: &str) {
        let store = BrowserSessionStore::open();
        self.set_session.update(|s| s.select_admin(&store, admin_id));
        tracing::info!(admin_id, "admin selected");
    }

    /// Forget the selection if it points at a deleted admin. The header then
    /// re-runs its auto-pick against the remaining admins.
    pub fn forget_admin(&self, admin_id: &str) {
        if self.session.with_untracked(|s| s.selected_admin_id.as_deref() != Some(admin_id)) {
            return;
        }
        let store = BrowserSessionStore::open();
        self.set_session.update(|s| {
            s.clear_selection(&store, admin_id);
        });
        tracing::info!(admin_id, "selected admin deleted");
    }

    /// Switch to another admin: persist the choice and reload the page.
    pub fn switch_admin(&self, admin_id: &str) {
        let mut session = self.session.get_untracked();
        session.select_admin(&BrowserSessionStore::open(), admin_id);
        tracing::info!(admin_id, "admin switched, reloading");
        platform::reload_page();
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify_success(&self, message: impl Into<String>) {
        self.toast(ToastKind::Success, message.into());
    }

    /// Log the failure and show the backend's message when it sent one.
    ///
    /// An expired session also signs the user out.
    pub fn notify_error(&self, action: &str, err: &ApiError) {
        tracing::error!(action, error = %err, "request failed");
        self.toast(ToastKind::Error, err.user_message());
        if err.requires_login() {
            self.sign_out();
        }
    }

    /// Failures from browser APIs, already phrased for display.
    pub fn notify_failure(&self, action: &str, message: String) {
        tracing::error!(action, %message, "browser call failed");
        self.toast(ToastKind::Error, message);
    }

    fn toast(&self, kind: ToastKind, message: String) {
        let id = store_push_toast(&self.store, kind, message);
        let store = self.store;
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_dismiss_toast(&store, id);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
