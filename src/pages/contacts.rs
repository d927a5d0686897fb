//! Contacts Screen

use leptos::prelude::*;
use workforce_core::domain::{Contact, ContactDraft};

use crate::components::{opt_text, some_text, DeleteConfirmButton, Field, Modal, RequireTenant, SearchBox, TextArea};
use crate::context::use_app_context;
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};

#[component]
pub fn ContactsPage() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_resource_list::<Contact>(ctx);
    let form = FormState::<ContactDraft>::new();
    let page_size = ctx.config().page_size;

    let rows = move || {
        list.page.get().results.into_iter().map(|contact| {
            let id = contact.id;
            let draft = contact.to_draft();
            view! {
                <tr>
                    <td>{contact.name}</td>
                    <td>{contact.phone}</td>
                    <td>{contact.email.unwrap_or_default()}</td>
                    <td>{contact.company.unwrap_or_default()}</td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton on_confirm={move |_| delete_resource::<Contact>(ctx, list, id)} />
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
                        placeholder="Search by name or phone"
                        on_search=move |text: String| list.query.update(|q| *q = q.clone().with_search(&text))
                    />
                    <button class="btn btn-primary" on:click=move |_| form.open_new(ContactDraft::default())>"Add Contact"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Name"</th><th>"Phone"</th><th>"Email"</th><th>"Company"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(5, "contacts")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Contact"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<Contact>(ctx, list, form)}
                    >
                        <Field label="Name" required=true value=form.text(|d| d.name.clone()) on_input=form.on_input(|d, v| d.name = v) />
                        <Field label="Phone" required=true input_type="tel" value=form.text(|d| d.phone.clone()) on_input=form.on_input(|d, v| d.phone = v) />
                        <Field label="Email" input_type="email" value=form.text(|d| opt_text(&d.email)) on_input=form.on_input(|d, v| d.email = some_text(v)) />
                        <Field label="Company" value=form.text(|d| opt_text(&d.company)) on_input=form.on_input(|d, v| d.company = some_text(v)) />
                        <Field label="Address" value=form.text(|d| opt_text(&d.address)) on_input=form.on_input(|d, v| d.address = some_text(v)) />
                        <TextArea label="Notes" value=form.text(|d| opt_text(&d.notes)) on_input=form.on_input(|d, v| d.notes = some_text(v)) />
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}
