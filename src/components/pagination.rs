//! Pagination Component

use leptos::prelude::*;

/// Previous/next controls for a paged list.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u64>,
    #[prop(into)] has_previous: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn btn-small"
                disabled=move || !has_previous.get()
                on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", page.get(), total_pages.get())}
            </span>
            <button
                class="btn btn-small"
                disabled=move || !has_next.get()
                on:click=move |_| on_page.run(page.get_untracked() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
