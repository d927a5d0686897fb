//! Workforce Admin App
//!
//! Root component: login gate, then sidebar navigation, header and the
//! active screen.

use leptos::prelude::*;
use reactive_stores::Store;
use workforce_core::{AppConfig, Session};

use crate::components::{Header, Sidebar, ToastHost};
use crate::context::AppContext;
use crate::pages::LoginPage;
use crate::platform::BrowserSessionStore;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let session = Session::load(&BrowserSessionStore::open());
    tracing::info!(signed_in = session.is_signed_in(), role = session.role.as_str(), "session restored");
    let ctx = AppContext::new(config, session, store);
    provide_context(ctx);

    view! {
        <Show
            when=move || ctx.session.with(|s| s.is_signed_in())
            fallback=|| view! { <LoginPage /> }
        >
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">
                    <Header />
                    {move || ctx.screen.get().render()}
                </main>
            </div>
        </Show>
        <ToastHost />
    }
}
