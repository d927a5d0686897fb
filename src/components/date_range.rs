//! Date Range Filter Component

use chrono::NaiveDate;
use leptos::prelude::*;
use workforce_core::validation::parse_date;

/// Two date pickers; every change reports the full range.
#[component]
pub fn DateRangeFilter(#[prop(into)] on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>) -> impl IntoView {
    let from = RwSignal::new(None::<NaiveDate>);
    let to = RwSignal::new(None::<NaiveDate>);
    let emit = move || on_change.run((from.get_untracked(), to.get_untracked()));

    view! {
        <div class="date-range">
            <label>
                <span>"From"</span>
                <input
                    type="date"
                    on:change=move |ev| {
                        from.set(parse_date("from", &event_target_value(&ev)).ok().flatten());
                        emit();
                    }
                />
            </label>
            <label>
                <span>"To"</span>
                <input
                    type="date"
                    on:change=move |ev| {
                        to.set(parse_date("to", &event_target_value(&ev)).ok().flatten());
                        emit();
                    }
                />
            </label>
        </div>
    }
}
