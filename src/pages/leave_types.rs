//! Leave Types Screen

use leptos::prelude::*;
use workforce_core::domain::{LeaveType, LeaveTypeDraft};

use crate::components::{opt_text, some_text, Checkbox, DeleteConfirmButton, Field, Modal, RequireTenant, TextArea};
use crate::context::use_app_context;
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};

#[component]
pub fn LeaveTypesPage() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_resource_list::<LeaveType>(ctx);
    let form = FormState::<LeaveTypeDraft>::new();
    let page_size = ctx.config().page_size;

    let rows = move || {
        list.page.get().results.into_iter().map(|leave_type| {
            let id = leave_type.id;
            let draft = leave_type.to_draft();
            view! {
                <tr>
                    <td>{leave_type.name}</td>
                    <td>{leave_type.code.unwrap_or_default()}</td>
                    <td>{if leave_type.is_paid { "Paid" } else { "Unpaid" }}</td>
                    <td>{leave_type.description.unwrap_or_default()}</td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton on_confirm={move |_| delete_resource::<LeaveType>(ctx, list, id)} />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <button class="btn btn-primary" on:click=move |_| form.open_new(LeaveTypeDraft { is_paid: true, ..Default::default() })>
                        "Add Leave Type"
                    </button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Name"</th><th>"Code"</th><th>"Pay"</th><th>"Description"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(5, "leave types")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Leave Type"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<LeaveType>(ctx, list, form)}
                    >
                        <Field label="Name" required=true value=form.text(|d| d.name.clone()) on_input=form.on_input(|d, v| d.name = v) />
                        <Field label="Code" placeholder="e.g. CL" value=form.text(|d| opt_text(&d.code)) on_input=form.on_input(|d, v| d.code = some_text(v)) />
                        <Checkbox
                            label="Paid leave"
                            checked=Signal::derive(move || form.draft.with(|d| d.is_paid))
                            on_toggle=move |paid: bool| form.draft.update(|d| d.is_paid = paid)
                        />
                        <TextArea label="Description" value=form.text(|d| opt_text(&d.description)) on_input=form.on_input(|d, v| d.description = some_text(v)) />
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}
