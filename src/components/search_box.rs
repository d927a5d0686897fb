//! Search Box Component

use leptos::prelude::*;

/// Search input applied on submit (Enter or the button).
#[component]
pub fn SearchBox(#[prop(into)] placeholder: String, #[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let text = RwSignal::new(String::new());

    view! {
        <form
            class="search-box"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_search.run(text.get_untracked());
            }
        >
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <button class="btn" type="submit">"Search"</button>
        </form>
    }
}
