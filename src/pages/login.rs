//! Login Screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::api::login;
use workforce_core::domain::Credentials;
use workforce_core::ReqwestTransport;

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials { email: email.get_untracked().trim().to_string(), password: password.get_untracked() };
        let transport = ReqwestTransport::new(&ctx.config().api_base_url);
        busy.set(true);
        spawn_local(async move {
            let result = login(&transport, &credentials).await;
            busy.set(false);
            match result {
                Ok(data) => {
                    password.set(String::new());
                    ctx.sign_in(&data);
                    ctx.notify_success("Signed in");
                }
                Err(err) => ctx.notify_error("login", &err),
            }
        });
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=submit>
                <h1>"Workforce Admin"</h1>
                <label class="field">
                    <span class="field-label">"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
