//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use workforce_core::domain::{Admin, Employee, LeaveType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Admins of the signed-in organization (empty for other roles)
    pub admins: Vec<Admin>,
    /// Employees of the active admin, for assignment pickers
    pub employees: Vec<Employee>,
    /// Leave types of the active admin, for the policy form
    pub leave_types: Vec<LeaveType>,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_admins(store: &AppStore, admins: Vec<Admin>) {
    store.admins().set(admins);
}

pub fn store_admins(store: &AppStore) -> Vec<Admin> {
    store.admins().get()
}

pub fn store_set_employees(store: &AppStore, employees: Vec<Employee>) {
    store.employees().set(employees);
}

pub fn store_employees(store: &AppStore) -> Vec<Employee> {
    store.employees().get()
}

pub fn store_set_leave_types(store: &AppStore, leave_types: Vec<LeaveType>) {
    store.leave_types().set(leave_types);
}

pub fn store_leave_types(store: &AppStore) -> Vec<LeaveType> {
    store.leave_types().get()
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}

/// Append a toast and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: String) -> u64 {
    let id = store.next_toast_id().get_untracked() + 1;
    store.next_toast_id().set(id);
    store.toasts().write().push(Toast { id, kind, message });
    id
}

pub fn store_dismiss_toast(store: &AppStore, id: u64) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Drop tenant-scoped caches, e.g. on sign-out
pub fn store_clear_tenant_data(store: &AppStore) {
    store.admins().write().clear();
    store.employees().write().clear();
    store.leave_types().write().clear();
}
