//! Header Component
//!
//! Top bar with the signed-in role, the organization's admin switcher and
//! sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::domain::Admin;
use workforce_core::session::reconcile_selection;
use workforce_core::ListQuery;

use crate::context::use_app_context;
use crate::store::{store_admins, store_set_admins, use_app_store};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <span class="app-title">{move || ctx.screen.get().label()}</span>
            <div class="header-actions">
                <Show when=move || ctx.is_organization()>
                    <AdminSwitcher />
                </Show>
                <span class="role-badge">{move || ctx.session.with(|s| s.role.as_str().to_string())}</span>
                <button class="btn btn-small" on:click=move |_| ctx.sign_out()>"Sign out"</button>
            </div>
        </header>
    }
}

/// Admin picker for organizations.
///
/// Loads the organization's admins once per session change. With no admin
/// selected yet, the first one is adopted. A failed load is logged and the
/// header renders without options.
#[component]
fn AdminSwitcher() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        let organization = ctx.session.with(|s| s.organization_id.clone());
        if organization.is_none() {
            return;
        }
        let client = match ctx.client() {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!(error = %err, "admin switcher has no session");
                return;
            }
        };
        spawn_local(async move {
            match client.list::<Admin>(&ListQuery::default()).await {
                Ok(page) => {
                    let pick = ctx.session.with_untracked(|s| reconcile_selection(s, &page.results));
                    store_set_admins(&store, page.results);
                    if let Some(id) = pick {
                        ctx.adopt_admin(&id.to_string());
                    }
                }
                Err(err) => tracing::warn!(error = %err, "could not load admins"),
            }
        });
    });

    let selected = move || ctx.session.with(|s| s.selected_admin_id.clone().unwrap_or_default());

    view! {
        <label class="admin-switcher">
            <span>"Admin"</span>
            <select
                prop:value=selected
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if !value.is_empty() && value != selected() {
                        ctx.switch_admin(&value);
                    }
                }
            >
                <Show when=move || ctx.session.with(|s| s.selected_admin_id.is_none())>
                    <option value="">"Select admin"</option>
                </Show>
                <For
                    each=move || store_admins(&store)
                    key=|admin| admin.id
                    children=move |admin| {
                        let value = admin.id.to_string();
                        view! { <option value=value>{admin.name}</option> }
                    }
                />
            </select>
        </label>
    }
}
