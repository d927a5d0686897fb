//! List Screen Plumbing
//!
//! Signals shared by every list screen: the filter query, the fetched page
//! and the modal form. Fetches re-run whenever the query, the session or the
//! reload trigger changes; mutations go through the core crud helpers so the
//! table is refilled from the backend afterwards.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use workforce_core::crud::{self, Mutation};
use workforce_core::domain::EntityId;
use workforce_core::{ApiClient, ApiError, ListQuery, Page, Resource};

use crate::components::Pagination;
use crate::context::AppContext;

pub struct ListState<R: Send + Sync + 'static> {
    pub query: RwSignal<ListQuery>,
    pub page: RwSignal<Page<R>>,
    pub loading: RwSignal<bool>,
}

impl<R: Send + Sync + 'static> Clone for ListState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListState<R> {}

impl<R: Send + Sync + 'static> ListState<R> {
    /// Apply the re-fetch that follows a mutation.
    fn apply(&self, ctx: &AppContext, refreshed: Result<Page<R>, ApiError>) {
        match refreshed {
            Ok(page) => self.page.set(page),
            Err(err) => ctx.notify_error("refresh", &err),
        }
    }

    pub fn set_page_number(&self, page: u32) {
        self.query.update(|q| *q = q.clone().with_page(page));
    }
}

/// List state fed by an arbitrary fetch.
///
/// A missing tenant is not an error here: the screen shows the admin prompt
/// and the fetch never reaches the network.
pub fn use_list<R, F, Fut>(ctx: AppContext, initial: ListQuery, fetch: F) -> ListState<R>
where
    R: Send + Sync + 'static,
    F: Fn(ApiClient, ListQuery) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<Page<R>, ApiError>> + 'static,
{
    let state = ListState {
        query: RwSignal::new(initial),
        page: RwSignal::new(Page::default()),
        loading: RwSignal::new(true),
    };

    Effect::new(move |_| {
        ctx.reload_trigger.track();
        ctx.session.track();
        let query = state.query.get();
        let client = match ctx.client() {
            Ok(client) => client,
            Err(err) => {
                tracing::debug!(error = %err, "list fetch skipped");
                state.loading.set(false);
                return;
            }
        };
        state.loading.set(true);
        spawn_local(async move {
            match fetch(client, query).await {
                Ok(page) => state.page.set(page),
                Err(ApiError::NoTenant) => state.page.set(Page::default()),
                Err(err) => ctx.notify_error("load list", &err),
            }
            state.loading.set(false);
        });
    });

    state
}

/// List state for a [`Resource`] screen, paged by the configured size.
pub fn use_resource_list<R>(ctx: AppContext) -> ListState<R>
where
    R: Resource + Send + Sync,
{
    let initial = ListQuery::paged(ctx.config().page_size);
    use_list(ctx, initial, |client, query| async move { crud::fetch_page::<R, _>(&client, &query).await })
}

// ========================
// Mutations
// ========================

/// Create or update, toast, close the form and refill the table.
pub fn save_resource<R>(ctx: AppContext, state: ListState<R>, form: FormState<R::Draft>)
where
    R: Resource + Send + Sync,
    R::Draft: Send + Sync + 'static,
{
    let existing = form.id.get_untracked();
    let draft = form.draft.get_untracked();
    let query = state.query.get_untracked();
    let verb = if existing.is_some() { "updated" } else { "created" };
    spawn_local(async move {
        let client = match ctx.client() {
            Ok(client) => client,
            Err(err) => return ctx.notify_error("save", &err),
        };
        form.saving.set(true);
        let result: Result<Mutation<R>, ApiError> = crud::save_and_refetch(&client, existing, &draft, &query).await;
        form.saving.set(false);
        match result {
            Ok(mutation) => {
                ctx.notify_success(crud::success_message::<R>(&mutation.ack, verb));
                form.close();
                state.apply(&ctx, mutation.refreshed);
            }
            Err(err) => ctx.notify_error(&format!("save {}", R::NAME), &err),
        }
    });
}

pub fn delete_resource<R>(ctx: AppContext, state: ListState<R>, id: EntityId)
where
    R: Resource + Send + Sync,
{
    delete_resource_then(ctx, state, id, |_| ());
}

/// Delete, then run `on_deleted` before the table is refilled.
pub fn delete_resource_then<R, F>(ctx: AppContext, state: ListState<R>, id: EntityId, on_deleted: F)
where
    R: Resource + Send + Sync,
    F: FnOnce(EntityId) + 'static,
{
    let query = state.query.get_untracked();
    spawn_local(async move {
        let client = match ctx.client() {
            Ok(client) => client,
            Err(err) => return ctx.notify_error("delete", &err),
        };
        match crud::delete_and_refetch::<R, _>(&client, id, &query).await {
            Ok(mutation) => {
                ctx.notify_success(crud::success_message::<R>(&mutation.ack, "deleted"));
                on_deleted(id);
                state.apply(&ctx, mutation.refreshed);
            }
            Err(err) => ctx.notify_error(&format!("delete {}", R::NAME), &err),
        }
    });
}

// ========================
// Modal form
// ========================

/// Create/edit modal state around a draft payload.
pub struct FormState<D: Send + Sync + 'static> {
    pub open: RwSignal<bool>,
    pub id: RwSignal<Option<EntityId>>,
    pub draft: RwSignal<D>,
    pub saving: RwSignal<bool>,
}

impl<D: Send + Sync + 'static> Clone for FormState<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormState<D> {}

impl<D: Clone + Default + Send + Sync + 'static> FormState<D> {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            id: RwSignal::new(None),
            draft: RwSignal::new(D::default()),
            saving: RwSignal::new(false),
        }
    }

    pub fn open_new(&self, draft: D) {
        self.id.set(None);
        self.draft.set(draft);
        self.open.set(true);
    }

    pub fn open_edit(&self, id: EntityId, draft: D) {
        self.id.set(Some(id));
        self.draft.set(draft);
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn title(&self, noun: &str) -> String {
        match self.id.get() {
            Some(_) => format!("Edit {}", noun),
            None => format!("Add {}", noun),
        }
    }

    /// Derived text for an input bound to one draft field.
    pub fn text(&self, read: impl Fn(&D) -> String + Send + Sync + 'static) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| read(d)))
    }

    /// Input handler writing one draft field.
    pub fn on_input(&self, write: impl Fn(&mut D, String) + Send + Sync + 'static) -> Callback<String> {
        let draft = self.draft;
        Callback::new(move |value: String| draft.update(|d| write(d, value)))
    }
}

// ========================
// Views
// ========================

impl<R: Send + Sync + 'static> ListState<R> {
    /// Pagination controls bound to this list.
    pub fn pager(&self, page_size: u32) -> impl IntoView {
        let state = *self;
        view! {
            <Pagination
                page=Signal::derive(move || state.query.with(|q| q.current_page()))
                total_pages=Signal::derive(move || state.page.with(|p| p.total_pages(page_size)))
                has_previous=Signal::derive(move || state.page.with(|p| p.has_previous()))
                has_next=Signal::derive(move || state.page.with(|p| p.has_next()))
                on_page=move |page: u32| state.set_page_number(page)
            />
        }
    }

    /// Placeholder row shown while the table has nothing to render.
    pub fn empty_row(&self, columns: u32, what: &'static str) -> impl IntoView {
        let state = *self;
        view! {
            <Show when=move || state.page.with(|p| p.is_empty())>
                <tr class="empty-row">
                    <td colspan=columns.to_string()>
                        {move || if state.loading.get() { "Loading...".to_string() } else { format!("No {} found", what) }}
                    </td>
                </tr>
            </Show>
        }
    }
}
