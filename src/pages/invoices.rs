//! Invoices Screen
//!
//! Invoices with an optional file attachment. A picked file is read into
//! memory right away and uploaded with the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use workforce_core::domain::{Invoice, InvoiceDraft, InvoiceStatus};
use workforce_core::validation::{parse_date, parse_f64};

use crate::components::{
    date_text, number_text, opt_text, some_text, DeleteConfirmButton, Field, Modal, RequireTenant, SearchBox,
    SelectField, TextArea,
};
use crate::context::use_app_context;
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};
use crate::platform;

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_resource_list::<Invoice>(ctx);
    let form = FormState::<InvoiceDraft>::new();
    let page_size = ctx.config().page_size;

    let status_options = Signal::derive(|| {
        InvoiceStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.label().to_string())).collect::<Vec<_>>()
    });
    let status_filter = Signal::derive(move || list.query.with(|q| q.status.clone().unwrap_or_default()));

    let pick_file = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            form.draft.update(|d| d.attachment = None);
            return;
        };
        spawn_local(async move {
            match platform::read_attachment(file).await {
                Ok(attachment) => form.draft.update(|d| d.attachment = Some(attachment)),
                Err(message) => ctx.notify_failure("read attachment", message),
            }
        });
    };

    let rows = move || {
        list.page.get().results.into_iter().map(|invoice| {
            let id = invoice.id;
            let draft = invoice.to_draft();
            let amount = invoice.amount_label();
            view! {
                <tr>
                    <td>{invoice.invoice_number}</td>
                    <td>{invoice.client_name}</td>
                    <td class="numeric">{amount}</td>
                    <td>{date_text(Some(invoice.issue_date))}</td>
                    <td>{date_text(invoice.due_date)}</td>
                    <td><span class=format!("badge badge-{}", invoice.status.as_str())>{invoice.status.label()}</span></td>
                    <td>
                        {invoice.attachment.map(|url| view! {
                            <a href=url target="_blank" rel="noopener">"View"</a>
                        })}
                    </td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton on_confirm={move |_| delete_resource::<Invoice>(ctx, list, id)} />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <SearchBox
                        placeholder="Search invoice or client"
                        on_search=move |text: String| list.query.update(|q| *q = q.clone().with_search(&text))
                    />
                    <SelectField
                        label="Status"
                        blank="All"
                        options=status_options
                        value=status_filter
                        on_change=move |status: String| list.query.update(|q| *q = q.clone().with_status(Some(&status)))
                    />
                    <button class="btn btn-primary" on:click=move |_| form.open_new(InvoiceDraft::default())>"Add Invoice"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Number"</th><th>"Client"</th><th>"Amount"</th><th>"Issued"</th>
                            <th>"Due"</th><th>"Status"</th><th>"File"</th><th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list.empty_row(8, "invoices")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Invoice"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<Invoice>(ctx, list, form)}
                    >
                        <Field label="Invoice number" required=true value=form.text(|d| d.invoice_number.clone()) on_input=form.on_input(|d, v| d.invoice_number = v) />
                        <Field label="Client" required=true value=form.text(|d| d.client_name.clone()) on_input=form.on_input(|d, v| d.client_name = v) />
                        <Field
                            label="Amount"
                            input_type="number"
                            required=true
                            value=form.text(|d| number_text(d.amount))
                            on_input=form.on_input(|d, v| d.amount = parse_f64("amount", &v).ok().flatten())
                        />
                        <div class="field-row">
                            <Field
                                label="Issue date"
                                input_type="date"
                                required=true
                                value=form.text(|d| date_text(d.issue_date))
                                on_input=form.on_input(|d, v| d.issue_date = parse_date("issue_date", &v).ok().flatten())
                            />
                            <Field
                                label="Due date"
                                input_type="date"
                                value=form.text(|d| date_text(d.due_date))
                                on_input=form.on_input(|d, v| d.due_date = parse_date("due_date", &v).ok().flatten())
                            />
                        </div>
                        <SelectField
                            label="Status"
                            options=status_options
                            value=form.text(|d| d.status.as_str().to_string())
                            on_change=form.on_input(|d, v| d.status = InvoiceStatus::from(v))
                        />
                        <TextArea label="Notes" value=form.text(|d| opt_text(&d.notes)) on_input=form.on_input(|d, v| d.notes = some_text(v)) />
                        <label class="field">
                            <span class="field-label">"Attachment"</span>
                            <input type="file" accept=".pdf,image/*" on:change=pick_file />
                            <span class="field-hint">
                                {move || form.draft.with(|d| d.attachment.as_ref().map(|a| a.file_name.clone()).unwrap_or_default())}
                            </span>
                        </label>
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}
