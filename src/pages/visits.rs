//! Visits Screen
//!
//! Scheduled field visits. Check-in and check-out take a fresh position fix
//! before posting it.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::domain::{EntityId, Visit, VisitDraft, VisitStatus};
use workforce_core::validation::{parse_date, parse_id, parse_time};
use workforce_core::ApiError;

use crate::components::{
    date_text, opt_text, some_text, time_text, DateRangeFilter, DeleteConfirmButton, Field, Modal, RequireTenant,
    SelectField, TextArea,
};
use crate::context::{use_app_context, AppContext};
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};
use crate::platform;
use crate::store::{store_employees, store_set_employees, use_app_store, AppStore};

#[derive(Clone, Copy, PartialEq)]
enum Checkpoint {
    In,
    Out,
}

#[component]
pub fn VisitsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let list = use_resource_list::<Visit>(ctx);
    let form = FormState::<VisitDraft>::new();
    let page_size = ctx.config().page_size;
    // Visit whose check-in/out is in flight
    let locating = RwSignal::new(None::<EntityId>);

    load_employees(ctx, store);

    let checkpoint = move |id: EntityId, which: Checkpoint| record_checkpoint(ctx, locating, id, which);

    let status_options = Signal::derive(|| {
        VisitStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.label().to_string())).collect::<Vec<_>>()
    });
    let employee_options = Signal::derive(move || {
        store_employees(&store).into_iter().map(|e| (e.id.to_string(), e.name)).collect::<Vec<_>>()
    });
    let status_filter = Signal::derive(move || list.query.with(|q| q.status.clone().unwrap_or_default()));

    let rows = move || {
        list.page.get().results.into_iter().map(|visit| {
            let id = visit.id;
            let draft = visit.to_draft();
            let can_check_in = visit.can_check_in();
            let can_check_out = visit.can_check_out();
            let busy = Signal::derive(move || locating.get() == Some(id));
            let when = match visit.schedule_time {
                Some(t) => format!("{} {}", visit.schedule_date, t.format("%H:%M")),
                None => visit.schedule_date.to_string(),
            };
            view! {
                <tr>
                    <td>{visit.title}</td>
                    <td>{when}</td>
                    <td>{visit.address}</td>
                    <td>{visit.assigned_employee_name.unwrap_or_default()}</td>
                    <td><span class=format!("badge badge-{}", visit.status.as_str())>{visit.status.label()}</span></td>
                    <td class="row-actions">
                        <Show when=move || can_check_in>
                            <button class="btn btn-small" disabled=move || busy.get() on:click=move |_| checkpoint(id, Checkpoint::In)>
                                {move || if busy.get() { "Locating..." } else { "Check in" }}
                            </button>
                        </Show>
                        <Show when=move || can_check_out>
                            <button class="btn btn-small" disabled=move || busy.get() on:click=move |_| checkpoint(id, Checkpoint::Out)>
                                {move || if busy.get() { "Locating..." } else { "Check out" }}
                            </button>
                        </Show>
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton disabled=busy on_confirm={move |_| delete_resource::<Visit>(ctx, list, id)} />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <DateRangeFilter on_change=move |(from, to): (Option<NaiveDate>, Option<NaiveDate>)| list.query.update(|q| *q = q.clone().with_range(from, to)) />
                    <SelectField
                        label="Status"
                        blank="All"
                        options=status_options
                        value=status_filter
                        on_change=move |status: String| list.query.update(|q| *q = q.clone().with_status(Some(&status)))
                    />
                    <button class="btn btn-primary" on:click=move |_| form.open_new(VisitDraft::default())>"Schedule Visit"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Title"</th><th>"Scheduled"</th><th>"Address"</th><th>"Employee"</th><th>"Status"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(6, "visits")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Visit"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<Visit>(ctx, list, form)}
                    >
                        <Field label="Title" required=true value=form.text(|d| d.title.clone()) on_input=form.on_input(|d, v| d.title = v) />
                        <TextArea label="Description" value=form.text(|d| opt_text(&d.description)) on_input=form.on_input(|d, v| d.description = some_text(v)) />
                        <Field
                            label="Date"
                            input_type="date"
                            required=true
                            value=form.text(|d| date_text(d.schedule_date))
                            on_input=form.on_input(|d, v| d.schedule_date = parse_date("schedule_date", &v).ok().flatten())
                        />
                        <Field
                            label="Time"
                            input_type="time"
                            value=form.text(|d| time_text(d.schedule_time))
                            on_input=form.on_input(|d, v| d.schedule_time = parse_time("schedule_time", &v).ok().flatten())
                        />
                        <Field label="Address" required=true value=form.text(|d| d.address.clone()) on_input=form.on_input(|d, v| d.address = v) />
                        <SelectField
                            label="Assigned employee"
                            options=employee_options
                            value=form.text(|d| d.assigned_employee.map(|id| id.to_string()).unwrap_or_default())
                            on_change=form.on_input(|d, v| d.assigned_employee = parse_id(&v))
                        />
                        <SelectField
                            label="Status"
                            options=status_options
                            value=form.text(|d| d.status.as_str().to_string())
                            on_change=form.on_input(|d, v| d.status = VisitStatus::from(v))
                        />
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}

/// Keep the employee picker in step with the active admin.
fn load_employees(ctx: AppContext, store: AppStore) {
    Effect::new(move |_| {
        ctx.session.track();
        ctx.reload_trigger.track();
        let Ok(client) = ctx.client() else { return };
        spawn_local(async move {
            match client.list_employees().await {
                Ok(employees) => store_set_employees(&store, employees),
                Err(ApiError::NoTenant) => store_set_employees(&store, Vec::new()),
                Err(err) => ctx.notify_error("load employees", &err),
            }
        });
    });
}

fn record_checkpoint(ctx: AppContext, locating: RwSignal<Option<EntityId>>, id: EntityId, which: Checkpoint) {
    let timeout = ctx.config().geolocation_timeout_ms;
    locating.set(Some(id));
    spawn_local(async move {
        let at = match platform::current_position(timeout).await {
            Ok(at) => at,
            Err(message) => {
                locating.set(None);
                return ctx.notify_failure("locate", message);
            }
        };
        let result = match ctx.client() {
            Ok(client) => match which {
                Checkpoint::In => client.visit_check_in(id, at).await,
                Checkpoint::Out => client.visit_check_out(id, at).await,
            },
            Err(err) => Err(err),
        };
        locating.set(None);
        let (action, done) = match which {
            Checkpoint::In => ("visit check-in", "Checked in"),
            Checkpoint::Out => ("visit check-out", "Checked out"),
        };
        match result {
            Ok(ack) => {
                ctx.notify_success(ack.message_or(done));
                ctx.reload();
            }
            Err(err) => ctx.notify_error(action, &err),
        }
    });
}
