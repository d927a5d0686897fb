//! Organization Admins Screen
//!
//! Organizations manage their admin accounts here. Requests are scoped by
//! the organization id, so no admin needs to be selected.

use leptos::prelude::*;
use workforce_core::domain::{Admin, AdminDraft};

use crate::components::{opt_text, some_text, DeleteConfirmButton, Field, Modal, SearchBox};
use crate::context::use_app_context;
use crate::list::{delete_resource_then, save_resource, use_resource_list, FormState};
use crate::store::{store_set_admins, use_app_store};

#[component]
pub fn AdminsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let list = use_resource_list::<Admin>(ctx);
    let form = FormState::<AdminDraft>::new();
    let page_size = ctx.config().page_size;

    // An unfiltered single page is the whole roster, even when empty; keep
    // the switcher in step once it has loaded.
    Effect::new(move |_| {
        let complete = list.query.with(|q| q.search.is_none() && q.current_page() == 1);
        let page = list.page.get();
        if complete && !list.loading.get() && !page.has_next() {
            store_set_admins(&store, page.results);
        }
    });

    let rows = move || {
        list.page.get().results.into_iter().map(|admin| {
            let id = admin.id;
            let draft = admin.to_draft();
            view! {
                <tr>
                    <td>{admin.name}</td>
                    <td>{admin.email}</td>
                    <td>{admin.phone.unwrap_or_default()}</td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton
                            on_confirm={move |_| delete_resource_then::<Admin, _>(ctx, list, id, move |id| ctx.forget_admin(&id.to_string()))}
                        />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <section class="screen">
            <div class="toolbar">
                <SearchBox
                    placeholder="Search admins"
                    on_search=move |text: String| list.query.update(|q| *q = q.clone().with_search(&text))
                />
                <button
                    class="btn btn-primary"
                    on:click=move |_| form.open_new(AdminDraft { require_password: true, ..Default::default() })
                >
                    "Add Admin"
                </button>
            </div>
            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Email"</th><th>"Phone"</th><th></th></tr>
                </thead>
                <tbody>
                    {list.empty_row(4, "admins")}
                    {rows}
                </tbody>
            </table>
            {list.pager(page_size)}
            <Show when=move || form.open.get()>
                <Modal
                    title=Signal::derive(move || form.title("Admin"))
                    busy=form.saving
                    on_close=move |_| form.close()
                    on_submit={move |_| save_resource::<Admin>(ctx, list, form)}
                >
                    <Field label="Name" required=true value=form.text(|d| d.name.clone()) on_input=form.on_input(|d, v| d.name = v) />
                    <Field label="Email" input_type="email" required=true value=form.text(|d| d.email.clone()) on_input=form.on_input(|d, v| d.email = v) />
                    <Field label="Phone" input_type="tel" value=form.text(|d| opt_text(&d.phone)) on_input=form.on_input(|d, v| d.phone = some_text(v)) />
                    <Field
                        label=if form.id.get_untracked().is_some() { "New password (optional)" } else { "Password" }
                        input_type="password"
                        required=form.id.get_untracked().is_none()
                        value=form.text(|d| opt_text(&d.password))
                        on_input=form.on_input(|d, v| d.password = (!v.is_empty()).then_some(v))
                    />
                </Modal>
            </Show>
        </section>
    }
}
