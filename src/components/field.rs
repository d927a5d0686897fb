//! Form Field Components
//!
//! Labelled inputs bound to a `Signal<String>` and an input callback.
//! Typed values are converted at the binding site (see `FormState::text`).

use chrono::{NaiveDate, NaiveTime};
use leptos::prelude::*;

#[component]
pub fn Field(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let step = (input_type == "number").then_some("any");
    // Numeric and date pickers commit on change so re-formatting never
    // fights a half-typed value.
    let live = !matches!(input_type.as_str(), "number" | "date" | "time");

    view! {
        <label class="field">
            <span class="field-label">{label}{required.then_some(" *")}</span>
            <input
                type=input_type
                step=step
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| if live { on_input.run(event_target_value(&ev)) }
                on:change=move |ev| if !live { on_input.run(event_target_value(&ev)) }
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="field field-inline">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// `<select>` over `(value, label)` pairs with a leading blank option.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] blank: Option<String>,
) -> impl IntoView {
    let blank = blank.unwrap_or_else(|| "Select...".to_string());

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{blank}</option>
                {move || options.get().into_iter().map(|(option, text)| {
                    let selected = value.get_untracked() == option;
                    view! { <option value=option selected=selected>{text}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}

// ========================
// Value formatting
// ========================

pub fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn time_text(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

pub fn number_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Optional text as typed; blank becomes `None`. Trimming waits for submit so
/// the cursor never jumps while typing.
pub fn some_text(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
