//! Shifts Screen

use leptos::prelude::*;
use workforce_core::domain::{Shift, ShiftDraft};
use workforce_core::validation::{parse_time, parse_u32};

use crate::components::{time_text, DeleteConfirmButton, Field, Modal, RequireTenant};
use crate::context::use_app_context;
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};

fn duration_label(shift: &Shift) -> String {
    let minutes = shift.duration_minutes();
    let label = format!("{}h {:02}m", minutes / 60, minutes % 60);
    if shift.is_overnight() {
        format!("{} (overnight)", label)
    } else {
        label
    }
}

#[component]
pub fn ShiftsPage() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_resource_list::<Shift>(ctx);
    let form = FormState::<ShiftDraft>::new();
    let page_size = ctx.config().page_size;

    let rows = move || {
        list.page.get().results.into_iter().map(|shift| {
            let id = shift.id;
            let draft = shift.to_draft();
            let duration = duration_label(&shift);
            view! {
                <tr>
                    <td>{shift.name}</td>
                    <td>{shift.start_time.format("%H:%M").to_string()}</td>
                    <td>{shift.end_time.format("%H:%M").to_string()}</td>
                    <td>{duration}</td>
                    <td>{format!("{} min", shift.grace_minutes)}</td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton on_confirm={move |_| delete_resource::<Shift>(ctx, list, id)} />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <button class="btn btn-primary" on:click=move |_| form.open_new(ShiftDraft::default())>"Add Shift"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Name"</th><th>"Start"</th><th>"End"</th><th>"Length"</th><th>"Grace"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(6, "shifts")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Shift"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<Shift>(ctx, list, form)}
                    >
                        <Field label="Name" required=true value=form.text(|d| d.name.clone()) on_input=form.on_input(|d, v| d.name = v) />
                        <Field
                            label="Start time"
                            input_type="time"
                            required=true
                            value=form.text(|d| time_text(d.start_time))
                            on_input=form.on_input(|d, v| d.start_time = parse_time("start_time", &v).ok().flatten())
                        />
                        <Field
                            label="End time"
                            input_type="time"
                            required=true
                            value=form.text(|d| time_text(d.end_time))
                            on_input=form.on_input(|d, v| d.end_time = parse_time("end_time", &v).ok().flatten())
                        />
                        <Field
                            label="Grace period (minutes)"
                            input_type="number"
                            value=form.text(|d| d.grace_minutes.to_string())
                            on_input=form.on_input(|d, v| d.grace_minutes = parse_u32("grace_minutes", &v).ok().flatten().unwrap_or(0))
                        />
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}
