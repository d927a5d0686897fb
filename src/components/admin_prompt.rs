//! Select Admin Prompt
//!
//! Shown in place of tenant-scoped screens while an organization has no
//! admin selected.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SelectAdminPrompt() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"Please select an admin"</h3>
            <p>"Choose an admin from the switcher in the header to view this data."</p>
        </div>
    }
}

/// Render `children` only when requests can be scoped to an admin.
#[component]
pub fn RequireTenant(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <Show when=move || ctx.has_tenant() fallback=|| view! { <SelectAdminPrompt /> }>
            {children()}
        </Show>
    }
}
