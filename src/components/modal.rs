//! Modal Component
//!
//! Overlay dialog hosting a create/edit form.

use leptos::prelude::*;

/// Modal with a title bar, a close button and a submit/cancel footer.
///
/// The body is rendered inside a `<form>`; submitting it runs `on_submit`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
    #[prop(optional, into)] submit_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Save".to_string());

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button class="modal-close" type="button" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form
                    class="modal-body"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {children()}
                    <div class="modal-footer">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving...".to_string() } else { submit_label.clone() }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
