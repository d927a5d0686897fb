//! Week Offs Screen

use leptos::prelude::*;
use workforce_core::domain::{Day, WeekOff, WeekOffDraft};

use crate::components::{DeleteConfirmButton, Field, Modal, RequireTenant};
use crate::context::use_app_context;
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};

#[component]
pub fn WeekOffsPage() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_resource_list::<WeekOff>(ctx);
    let form = FormState::<WeekOffDraft>::new();
    let page_size = ctx.config().page_size;

    let rows = move || {
        list.page.get().results.into_iter().map(|week_off| {
            let id = week_off.id;
            let draft = week_off.to_draft();
            let days = week_off.days_label();
            view! {
                <tr>
                    <td>{week_off.name}</td>
                    <td>{days}</td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton on_confirm={move |_| delete_resource::<WeekOff>(ctx, list, id)} />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    let day_toggles = move || {
        Day::ALL.into_iter().map(|day| {
            let active = move || form.draft.with(|d| d.days.contains(&day));
            view! {
                <button
                    type="button"
                    class=move || if active() { "day-btn active" } else { "day-btn" }
                    on:click=move |_| form.draft.update(|d| d.toggle(day))
                >
                    {day.short()}
                </button>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <button class="btn btn-primary" on:click=move |_| form.open_new(WeekOffDraft::default())>"Add Week Off"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Name"</th><th>"Days"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(3, "week offs")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Week Off"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<WeekOff>(ctx, list, form)}
                    >
                        <Field label="Name" required=true value=form.text(|d| d.name.clone()) on_input=form.on_input(|d, v| d.name = v) />
                        <div class="field">
                            <span class="field-label">"Days *"</span>
                            <div class="day-picker">{day_toggles}</div>
                        </div>
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}
