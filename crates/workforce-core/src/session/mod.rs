//! Session state
//!
//! The signed-in session lives in browser storage under fixed keys. It is
//! read into a [`Session`] snapshot once, and every API call gets an explicit
//! [`TenantContext`] built from that snapshot.

mod store;
mod tenant;

pub use store::{MemorySessionStore, SessionStore};
pub use tenant::{reconcile_selection, TenantContext};

use serde::{Deserialize, Serialize};

use crate::domain::LoginData;

pub const ACCESS_TOKEN: &str = "access_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const ROLE: &str = "role";
pub const USER_ID: &str = "user_id";
pub const ORGANIZATION_ID: &str = "organization_id";
pub const SELECTED_ADMIN_ID: &str = "selected_admin_id";

const ALL_KEYS: [&str; 6] = [ACCESS_TOKEN, REFRESH_TOKEN, ROLE, USER_ID, ORGANIZATION_ID, SELECTED_ADMIN_ID];

/// Account kind of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Owns several admins and works through a selected one.
    Organization,
    /// Acts as its own tenant.
    Admin,
    Other(String),
}

impl Default for Role {
    fn default() -> Self {
        Role::Other(String::new())
    }
}

impl Role {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "organization" => Role::Organization,
            "admin" => Role::Admin,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Organization => "organization",
            Role::Admin => "admin",
            Role::Other(s) => s,
        }
    }

    pub fn is_organization(&self) -> bool {
        matches!(self, Role::Organization)
    }
}

/// Snapshot of the session keys. Empty strings are read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub role: Role,
    pub user_id: Option<String>,
    pub organization_id: Option<String>,
    pub selected_admin_id: Option<String>,
}

impl Session {
    pub fn load(store: &dyn SessionStore) -> Self {
        let read = |key: &str| store.get(key).filter(|v| !v.trim().is_empty());
        Self {
            access_token: read(ACCESS_TOKEN),
            refresh_token: read(REFRESH_TOKEN),
            role: read(ROLE).map(|r| Role::parse(&r)).unwrap_or_default(),
            user_id: read(USER_ID),
            organization_id: read(ORGANIZATION_ID),
            selected_admin_id: read(SELECTED_ADMIN_ID),
        }
    }

    /// Session for a fresh login. Any earlier admin selection is dropped.
    pub fn from_login(login: &LoginData) -> Self {
        Self {
            access_token: Some(login.access.clone()),
            refresh_token: login.refresh.clone(),
            role: Role::parse(&login.role),
            user_id: Some(login.user_id.clone()),
            organization_id: login.organization_id.clone(),
            selected_admin_id: None,
        }
    }

    /// Write every key; absent values are removed from the store.
    pub fn persist(&self, store: &dyn SessionStore) {
        let role = self.role.as_str().to_string();
        let values = [
            (ACCESS_TOKEN, self.access_token.as_ref()),
            (REFRESH_TOKEN, self.refresh_token.as_ref()),
            (ROLE, Some(&role).filter(|r| !r.is_empty())),
            (USER_ID, self.user_id.as_ref()),
            (ORGANIZATION_ID, self.organization_id.as_ref()),
            (SELECTED_ADMIN_ID, self.selected_admin_id.as_ref()),
        ];
        for (key, value) in values {
            match value {
                Some(v) => store.set(key, v),
                None => store.remove(key),
            }
        }
    }

    /// Sign out: remove every session key.
    pub fn clear(store: &dyn SessionStore) {
        for key in ALL_KEYS {
            store.remove(key);
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.access_token.is_some()
    }

    /// Which admin id every API call should be scoped by.
    ///
    /// Organizations use their selected admin (`None` until one is picked);
    /// every other role is its own tenant and uses its `user_id`.
    pub fn resolve_admin_id(&self) -> Option<&str> {
        match self.role {
            Role::Organization => self.selected_admin_id.as_deref(),
            _ => self.user_id.as_deref(),
        }
    }

    /// Record a new active admin in the snapshot and the store.
    pub fn select_admin(&mut self, store: &dyn SessionStore, admin_id: &str) {
        self.selected_admin_id = Some(admin_id.to_string());
        store.set(SELECTED_ADMIN_ID, admin_id);
    }

    /// Drop the selection if it points at `admin_id`, e.g. after that admin
    /// was deleted. Returns whether anything changed.
    pub fn clear_selection(&mut self, store: &dyn SessionStore, admin_id: &str) -> bool {
        if self.selected_admin_id.as_deref() != Some(admin_id) {
            return false;
        }
        self.selected_admin_id = None;
        store.remove(SELECTED_ADMIN_ID);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(pairs: &[(&str, &str)]) -> MemorySessionStore {
        let store = MemorySessionStore::default();
        for (k, v) in pairs {
            store.set(k, v);
        }
        store
    }

    #[test]
    fn test_organization_uses_selected_admin() {
        let store = store_with(&[(ROLE, "organization"), (USER_ID, "7"), (SELECTED_ADMIN_ID, "42")]);
        let session = Session::load(&store);
        assert_eq!(session.resolve_admin_id(), Some("42"));
    }

    #[test]
    fn test_organization_without_selection_resolves_nothing() {
        let store = store_with(&[(ROLE, "organization"), (USER_ID, "7")]);
        assert_eq!(Session::load(&store).resolve_admin_id(), None);

        let blank = store_with(&[(ROLE, "organization"), (USER_ID, "7"), (SELECTED_ADMIN_ID, "")]);
        assert_eq!(Session::load(&blank).resolve_admin_id(), None);
    }

    #[test]
    fn test_admin_ignores_selected_admin() {
        let store = store_with(&[(ROLE, "admin"), (USER_ID, "7"), (SELECTED_ADMIN_ID, "42")]);
        assert_eq!(Session::load(&store).resolve_admin_id(), Some("7"));
    }

    #[test]
    fn test_unknown_role_acts_as_own_tenant() {
        let store = store_with(&[(ROLE, "employee"), (USER_ID, "9")]);
        let session = Session::load(&store);
        assert_eq!(session.role, Role::Other("employee".into()));
        assert_eq!(session.resolve_admin_id(), Some("9"));
    }

    #[test]
    fn test_persist_and_clear() {
        let store = MemorySessionStore::default();
        let mut session = Session {
            access_token: Some("tok".into()),
            role: Role::Organization,
            user_id: Some("1".into()),
            organization_id: Some("5".into()),
            ..Default::default()
        };
        session.persist(&store);
        session.select_admin(&store, "12");

        let loaded = Session::load(&store);
        assert_eq!(loaded, session);
        assert_eq!(store.get(REFRESH_TOKEN), None);

        Session::clear(&store);
        assert!(!Session::load(&store).is_signed_in());
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_login_drops_selection() {
        let login = LoginData {
            access: "a".into(),
            refresh: Some("r".into()),
            role: "organization".into(),
            user_id: "3".into(),
            organization_id: Some("8".into()),
        };
        let session = Session::from_login(&login);
        assert!(session.role.is_organization());
        assert_eq!(session.selected_admin_id, None);
        assert_eq!(session.organization_id.as_deref(), Some("8"));
    }

    #[test]
    fn test_deleted_admin_clears_selection() {
        let store = store_with(&[(ACCESS_TOKEN, "tok"), (ROLE, "organization"), (USER_ID, "1"), (SELECTED_ADMIN_ID, "42")]);
        let mut session = Session::load(&store);

        assert!(!session.clear_selection(&store, "41"));
        assert_eq!(session.resolve_admin_id(), Some("42"));

        assert!(session.clear_selection(&store, "42"));
        assert_eq!(session.resolve_admin_id(), None);
        assert_eq!(store.get(SELECTED_ADMIN_ID), None);
        assert_eq!(Session::load(&store), session);
        assert!(session.is_signed_in());
    }
}
