//! Tenant Context
//!
//! Request-scoped identity passed explicitly into every API call.

use super::{Role, Session};
use crate::domain::{Admin, EntityId};
use crate::error::ApiError;

/// Who is calling and which admin the call is scoped by.
///
/// Built once from a [`Session`] snapshot. `admin_id` is `None` for an
/// organization that has not picked an admin yet; anything that needs it
/// fails with [`ApiError::NoTenant`] before a request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub access_token: String,
    pub role: Role,
    pub user_id: Option<String>,
    pub organization_id: Option<String>,
    admin_id: Option<String>,
}

impl TenantContext {
    pub fn from_session(session: &Session) -> Result<Self, ApiError> {
        let access_token = session.access_token.clone().ok_or(ApiError::NotSignedIn)?;
        Ok(Self {
            access_token,
            role: session.role.clone(),
            user_id: session.user_id.clone(),
            organization_id: session.organization_id.clone(),
            admin_id: session.resolve_admin_id().map(str::to_string),
        })
    }

    /// Resolved admin id, or `NoTenant` when the user must pick one.
    pub fn admin_id(&self) -> Result<&str, ApiError> {
        self.admin_id.as_deref().ok_or(ApiError::NoTenant)
    }

    pub fn has_admin(&self) -> bool {
        self.admin_id.is_some()
    }

    pub fn user_id(&self) -> Result<&str, ApiError> {
        self.user_id.as_deref().ok_or(ApiError::NotSignedIn)
    }

    /// Organization scope for admin management.
    pub fn organization_id(&self) -> Result<&str, ApiError> {
        self.organization_id.as_deref().ok_or(ApiError::NoTenant)
    }
}

/// Header auto-selection for organizations.
///
/// Returns the admin to persist when the session is an organization with no
/// selection and the backend returned at least one admin.
pub fn reconcile_selection(session: &Session, admins: &[Admin]) -> Option<EntityId> {
    if !session.role.is_organization() || session.selected_admin_id.is_some() {
        return None;
    }
    admins.first().map(|admin| admin.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org_session(selected: Option<&str>) -> Session {
        Session {
            access_token: Some("token".into()),
            role: Role::Organization,
            user_id: Some("1".into()),
            organization_id: Some("100".into()),
            selected_admin_id: selected.map(str::to_string),
            ..Default::default()
        }
    }

    fn admin(id: EntityId) -> Admin {
        Admin { id, name: format!("Admin {}", id), email: format!("a{}@example.com", id), phone: None }
    }

    #[test]
    fn test_context_requires_token() {
        let session = Session { role: Role::Admin, user_id: Some("1".into()), ..Default::default() };
        assert_eq!(TenantContext::from_session(&session), Err(ApiError::NotSignedIn));
    }

    #[test]
    fn test_context_without_selection() {
        let ctx = TenantContext::from_session(&org_session(None)).unwrap();
        assert!(!ctx.has_admin());
        assert_eq!(ctx.admin_id(), Err(ApiError::NoTenant));
        assert_eq!(ctx.organization_id(), Ok("100"));
    }

    #[test]
    fn test_context_with_selection() {
        let ctx = TenantContext::from_session(&org_session(Some("55"))).unwrap();
        assert_eq!(ctx.admin_id(), Ok("55"));
    }

    #[test]
    fn test_reconcile_picks_first_admin() {
        let admins = vec![admin(3), admin(4)];
        assert_eq!(reconcile_selection(&org_session(None), &admins), Some(3));
    }

    #[test]
    fn test_reconcile_keeps_existing_selection() {
        let admins = vec![admin(3), admin(4)];
        assert_eq!(reconcile_selection(&org_session(Some("4")), &admins), None);
        assert_eq!(reconcile_selection(&org_session(None), &[]), None);
    }

    #[test]
    fn test_reconcile_ignores_admin_role() {
        let mut session = org_session(None);
        session.role = Role::Admin;
        assert_eq!(reconcile_selection(&session, &[admin(3)]), None);
    }
}
