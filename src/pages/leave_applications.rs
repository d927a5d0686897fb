//! Leave Applications Screen
//!
//! Employee leave requests; pending ones can be approved or rejected with
//! optional remarks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::domain::{EntityId, LeaveStatus, LeaveStatusUpdate};
use workforce_core::ListQuery;

use crate::components::{some_text, Modal, RequireTenant, SelectField, TextArea};
use crate::context::{use_app_context, AppContext};
use crate::list::use_list;

const STATUS_FILTERS: [LeaveStatus; 4] =
    [LeaveStatus::Pending, LeaveStatus::Approved, LeaveStatus::Rejected, LeaveStatus::Cancelled];

/// Decision being confirmed in the remarks dialog.
#[derive(Clone, Copy)]
struct Decision {
    id: EntityId,
    status: LeaveStatus,
}

#[component]
pub fn LeaveApplicationsPage() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.config().page_size;
    let list = use_list(ctx, ListQuery::paged(page_size), |client, query| async move {
        client.list_leave_applications(&query).await
    });
    let decision = RwSignal::new(None::<Decision>);
    let remarks = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let status_options = Signal::derive(|| {
        STATUS_FILTERS.iter().map(|s| (s.as_str().to_string(), s.label().to_string())).collect::<Vec<_>>()
    });
    let status_filter = Signal::derive(move || list.query.with(|q| q.status.clone().unwrap_or_default()));

    let decide = move |id: EntityId, status: LeaveStatus| {
        remarks.set(String::new());
        decision.set(Some(Decision { id, status }));
    };

    let rows = move || {
        list.page.get().results.into_iter().map(|application| {
            let id = application.id;
            let pending = application.is_pending();
            let period = format!("{} to {} ({} days)", application.from_date, application.to_date, application.days());
            view! {
                <tr>
                    <td>{application.employee_name.clone()}</td>
                    <td>{application.leave_type_name.clone()}</td>
                    <td>{period}</td>
                    <td>{application.reason.clone().unwrap_or_default()}</td>
                    <td><span class=format!("badge badge-{}", application.status.as_str())>{application.status.label()}</span></td>
                    <td class="row-actions">
                        <Show when=move || pending>
                            <button class="btn btn-small btn-primary" on:click=move |_| decide(id, LeaveStatus::Approved)>"Approve"</button>
                            <button class="btn btn-small btn-danger" on:click=move |_| decide(id, LeaveStatus::Rejected)>"Reject"</button>
                        </Show>
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <SelectField
                        label="Status"
                        blank="All"
                        options=status_options
                        value=status_filter
                        on_change=move |status: String| list.query.update(|q| *q = q.clone().with_status(Some(&status)))
                    />
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Employee"</th><th>"Type"</th><th>"Period"</th><th>"Reason"</th><th>"Status"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(6, "leave applications")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || decision.get().is_some()>
                    <Modal
                        title=Signal::derive(move || match decision.get().map(|d| d.status) {
                            Some(LeaveStatus::Rejected) => "Reject Leave".to_string(),
                            _ => "Approve Leave".to_string(),
                        })
                        submit_label="Confirm"
                        busy=saving
                        on_close=move |_| decision.set(None)
                        on_submit=move |_| {
                            if let Some(d) = decision.get_untracked() {
                                submit_decision(ctx, d, remarks.get_untracked(), decision, saving);
                            }
                        }
                    >
                        <TextArea
                            label="Remarks"
                            value=Signal::derive(move || remarks.get())
                            on_input=move |text: String| remarks.set(text)
                        />
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}

fn submit_decision(
    ctx: AppContext,
    chosen: Decision,
    remarks: String,
    decision: RwSignal<Option<Decision>>,
    saving: RwSignal<bool>,
) {
    let update = LeaveStatusUpdate { status: chosen.status, remarks: some_text(remarks).map(|r| r.trim().to_string()) };
    spawn_local(async move {
        let client = match ctx.client() {
            Ok(client) => client,
            Err(err) => return ctx.notify_error("leave decision", &err),
        };
        saving.set(true);
        let result = client.set_leave_status(chosen.id, &update).await;
        saving.set(false);
        match result {
            Ok(ack) => {
                ctx.notify_success(ack.message_or(&format!("Leave {}", chosen.status.as_str())));
                decision.set(None);
                ctx.reload();
            }
            Err(err) => ctx.notify_error("leave decision", &err),
        }
    });
}
