//! Leave Policies Screen
//!
//! Quotas attached to a leave type. The type picker is fed from the leave
//! types of the active admin.

use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::domain::{LeavePolicy, LeavePolicyDraft, LeaveType};
use workforce_core::validation::{parse_f64, parse_id};
use workforce_core::{ApiError, ListQuery};

use crate::components::{
    number_text, opt_text, some_text, Checkbox, DeleteConfirmButton, Field, Modal, RequireTenant, SelectField, TextArea,
};
use crate::context::use_app_context;
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};
use crate::store::{store_leave_types, store_set_leave_types, use_app_store};

#[component]
pub fn LeavePoliciesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let list = use_resource_list::<LeavePolicy>(ctx);
    let form = FormState::<LeavePolicyDraft>::new();
    let page_size = ctx.config().page_size;

    Effect::new(move |_| {
        ctx.session.track();
        ctx.reload_trigger.track();
        let Ok(client) = ctx.client() else { return };
        spawn_local(async move {
            match client.list::<LeaveType>(&ListQuery::default()).await {
                Ok(page) => store_set_leave_types(&store, page.results),
                Err(ApiError::NoTenant) => store_set_leave_types(&store, Vec::new()),
                Err(err) => ctx.notify_error("load leave types", &err),
            }
        });
    });

    let type_options = Signal::derive(move || {
        store_leave_types(&store).into_iter().map(|t| (t.id.to_string(), t.name)).collect::<Vec<_>>()
    });
    let type_name = move |policy: &LeavePolicy| {
        policy.leave_type_name.clone().unwrap_or_else(|| {
            store_leave_types(&store)
                .into_iter()
                .find(|t| t.id == policy.leave_type)
                .map(|t| t.name)
                .unwrap_or_default()
        })
    };

    let rows = move || {
        list.page.get().results.into_iter().map(|policy| {
            let id = policy.id;
            let draft = policy.to_draft();
            let leave_type = type_name(&policy);
            let carry = match (policy.carry_forward, policy.max_carry_forward) {
                (false, _) => "No".to_string(),
                (true, Some(max)) => format!("Up to {}", max),
                (true, None) => "Yes".to_string(),
            };
            view! {
                <tr>
                    <td>{policy.name}</td>
                    <td>{leave_type}</td>
                    <td>{policy.annual_quota}</td>
                    <td>{carry}</td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton on_confirm={move |_| delete_resource::<LeavePolicy>(ctx, list, id)} />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <button class="btn btn-primary" on:click=move |_| form.open_new(LeavePolicyDraft::default())>"Add Policy"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Name"</th><th>"Leave type"</th><th>"Annual quota"</th><th>"Carry forward"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(5, "leave policies")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Leave Policy"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<LeavePolicy>(ctx, list, form)}
                    >
                        <Field label="Name" required=true value=form.text(|d| d.name.clone()) on_input=form.on_input(|d, v| d.name = v) />
                        <SelectField
                            label="Leave type"
                            options=type_options
                            value=form.text(|d| d.leave_type.map(|id| id.to_string()).unwrap_or_default())
                            on_change=form.on_input(|d, v| d.leave_type = parse_id(&v))
                        />
                        <Field
                            label="Annual quota (days)"
                            input_type="number"
                            required=true
                            value=form.text(|d| number_text(d.annual_quota))
                            on_input=form.on_input(|d, v| d.annual_quota = parse_f64("annual_quota", &v).ok().flatten())
                        />
                        <Checkbox
                            label="Carry forward unused days"
                            checked=Signal::derive(move || form.draft.with(|d| d.carry_forward))
                            on_toggle=move |on: bool| form.draft.update(|d| d.carry_forward = on)
                        />
                        <Show when=move || form.draft.with(|d| d.carry_forward)>
                            <Field
                                label="Carry forward limit"
                                input_type="number"
                                value=form.text(|d| number_text(d.max_carry_forward))
                                on_input=form.on_input(|d, v| d.max_carry_forward = parse_f64("max_carry_forward", &v).ok().flatten())
                            />
                        </Show>
                        <TextArea label="Description" value=form.text(|d| opt_text(&d.description)) on_input=form.on_input(|d, v| d.description = some_text(v)) />
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}
