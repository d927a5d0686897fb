//! Attendance Screen
//!
//! Read-only attendance log filtered by date range and employee search.

use chrono::NaiveDate;
use leptos::prelude::*;
use workforce_core::ListQuery;

use crate::components::{time_text, DateRangeFilter, RequireTenant, SearchBox};
use crate::context::use_app_context;
use crate::list::use_list;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.config().page_size;
    let list = use_list(ctx, ListQuery::paged(page_size), |client, query| async move {
        client.list_attendance(&query).await
    });

    let rows = move || {
        list.page.get().results.into_iter().map(|record| {
            let hours = record.hours_worked().map(|h| format!("{:.2}", h)).unwrap_or_else(|| "-".to_string());
            view! {
                <tr>
                    <td>{record.employee_name.clone()}</td>
                    <td>{record.date.format("%Y-%m-%d").to_string()}</td>
                    <td>{time_text(record.check_in)}</td>
                    <td>{time_text(record.check_out)}</td>
                    <td>{hours}</td>
                    <td><span class=format!("badge badge-{}", record.status)>{record.status.clone()}</span></td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <RequireTenant>
            <section class="screen">
                <div class="toolbar">
                    <DateRangeFilter on_change=move |(from, to): (Option<NaiveDate>, Option<NaiveDate>)| {
                        list.query.update(|q| *q = q.clone().with_range(from, to))
                    } />
                    <SearchBox
                        placeholder="Search employee"
                        on_search=move |text: String| list.query.update(|q| *q = q.clone().with_search(&text))
                    />
                </div>
                <table class="data-table">
                    <thead>
                        <tr><th>"Employee"</th><th>"Date"</th><th>"Check in"</th><th>"Check out"</th><th>"Hours"</th><th>"Status"</th></tr>
                    </thead>
                    <tbody>
                        {list.empty_row(6, "attendance records")}
                        {rows}
                    </tbody>
                </table>
                {list.pager(page_size)}
            </section>
        </RequireTenant>
    }
}
