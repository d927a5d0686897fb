//! Sidebar Component
//!
//! Navigation between screens. Organization-only screens are hidden for
//! other roles.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::pages::Screen;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"Workforce Admin"</div>
            <ul>
                {Screen::ALL.into_iter().map(|screen| {
                    let visible = move || screen.is_visible(ctx.is_organization());
                    view! {
                        <Show when=visible>
                            <li>
                                <button
                                    class=move || if ctx.screen.get() == screen { "nav-link active" } else { "nav-link" }
                                    on:click=move |_| ctx.show(screen)
                                >
                                    {screen.label()}
                                </button>
                            </li>
                        </Show>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
