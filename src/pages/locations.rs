//! Locations Screen
//!
//! Named sites with coordinates and an optional geofence radius. The form
//! can fill the coordinates from the browser's position.

use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::domain::{Location, LocationDraft};
use workforce_core::validation::parse_f64;

use crate::components::{number_text, opt_text, some_text, DeleteConfirmButton, Field, Modal, RequireTenant};
use crate::context::use_app_context;
use crate::list::{delete_resource, save_resource, use_resource_list, FormState};
use crate::platform;

#[component]
pub fn LocationsPage() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_resource_list::<Location>(ctx);
    let form = FormState::<LocationDraft>::new();
    let page_size = ctx.config().page_size;
    let locating = RwSignal::new(false);

    let use_current_position = move |_| {
        let timeout = ctx.config().geolocation_timeout_ms;
        locating.set(true);
        spawn_local(async move {
            match platform::current_position(timeout).await {
                Ok(at) => form.draft.update(|d| {
                    d.latitude = Some(at.latitude);
                    d.longitude = Some(at.longitude);
                }),
                Err(message) => ctx.notify_failure("locate", message),
            }
            locating.set(false);
        });
    };

    let rows = move || {
        list.page.get().results.into_iter().map(|location| {
            let id = location.id;
            let draft = location.to_draft();
            view! {
                <tr>
                    <td>{location.name}</td>
                    <td>{location.address.unwrap_or_default()}</td>
                    <td>{format!("{:.6}, {:.6}", location.latitude, location.longitude)}</td>
                    <td>{location.radius_meters.map(|r| format!("{} m", r)).unwrap_or_default()}</td>
                    <td class="row-actions">
                        <button class="btn btn-small" on:click=move |_| form.open_edit(id, draft.clone())>"Edit"</button>
                        <DeleteConfirmButton on_confirm={move |_| delete_resource::<Location>(ctx, list, id)} />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <button class="btn btn-primary" on:click=move |_| form.open_new(LocationDraft::default())>"Add Location"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Name"</th><th>"Address"</th><th>"Coordinates"</th><th>"Radius"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(5, "locations")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
                <Show when=move || form.open.get()>
                    <Modal
                        title=Signal::derive(move || form.title("Location"))
                        busy=form.saving
                        on_close=move |_| form.close()
                        on_submit={move |_| save_resource::<Location>(ctx, list, form)}
                    >
                        <Field label="Name" required=true value=form.text(|d| d.name.clone()) on_input=form.on_input(|d, v| d.name = v) />
                        <Field label="Address" value=form.text(|d| opt_text(&d.address)) on_input=form.on_input(|d, v| d.address = some_text(v)) />
                        <div class="field-row">
                            <Field
                                label="Latitude"
                                input_type="number"
                                required=true
                                value=form.text(|d| number_text(d.latitude))
                                on_input=form.on_input(|d, v| d.latitude = parse_f64("latitude", &v).ok().flatten())
                            />
                            <Field
                                label="Longitude"
                                input_type="number"
                                required=true
                                value=form.text(|d| number_text(d.longitude))
                                on_input=form.on_input(|d, v| d.longitude = parse_f64("longitude", &v).ok().flatten())
                            />
                        </div>
                        <button class="btn btn-small" type="button" disabled=move || locating.get() on:click=use_current_position>
                            {move || if locating.get() { "Locating..." } else { "Use my location" }}
                        </button>
                        <Field
                            label="Radius (meters)"
                            input_type="number"
                            value=form.text(|d| number_text(d.radius_meters))
                            on_input=form.on_input(|d, v| d.radius_meters = parse_f64("radius_meters", &v).ok().flatten())
                        />
                    </Modal>
                </Show>
            </section>
        </RequireTenant>
    }
}
