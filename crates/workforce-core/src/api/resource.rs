//! Resource trait
//!
//! Ties an entity to its endpoints and its create/update payload, so list,
//! create, update and delete are written once for every screen.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::endpoints::{self as ep, path};
use super::transport::{FormPart, RequestBody};
use crate::domain::*;
use crate::error::ApiError;
use crate::session::TenantContext;
use crate::validation::Validate;

pub trait Resource: DeserializeOwned + Clone + PartialEq + 'static {
    /// Form payload for create and update.
    type Draft: Serialize + Validate + Clone + Default;

    /// Singular, human-facing name used in toasts ("Contact saved").
    const NAME: &'static str;

    fn id(&self) -> EntityId;

    fn collection_path(ctx: &TenantContext) -> Result<String, ApiError>;

    fn item_path(ctx: &TenantContext, id: EntityId) -> Result<String, ApiError>;

    /// Request body for a draft. JSON unless overridden.
    fn encode(draft: &Self::Draft) -> Result<RequestBody, ApiError> {
        RequestBody::json(draft)
    }

    /// Pre-filled form for editing this row.
    fn draft(&self) -> Self::Draft;
}

/// Resources scoped by `/{admin_id}` and `/{admin_id}/{id}`.
macro_rules! admin_scoped {
    ($ty:ty, $draft:ty, $name:literal, $collection:expr, $item:expr) => {
        impl Resource for $ty {
            type Draft = $draft;
            const NAME: &'static str = $name;

            fn id(&self) -> EntityId {
                self.id
            }

            fn collection_path(ctx: &TenantContext) -> Result<String, ApiError> {
                Ok(path($collection, &[ctx.admin_id()?]))
            }

            fn item_path(ctx: &TenantContext, id: EntityId) -> Result<String, ApiError> {
                Ok(path($item, &[ctx.admin_id()?, &id.to_string()]))
            }

            fn draft(&self) -> Self::Draft {
                self.to_draft()
            }
        }
    };
}

admin_scoped!(Contact, ContactDraft, "Contact", ep::CONTACT_LIST_CREATE, ep::CONTACT_DETAIL);
admin_scoped!(LeaveType, LeaveTypeDraft, "Leave type", ep::LEAVE_TYPES, ep::LEAVE_TYPES);
admin_scoped!(LeavePolicy, LeavePolicyDraft, "Leave policy", ep::LEAVE_POLICIES, ep::LEAVE_POLICIES);
admin_scoped!(Shift, ShiftDraft, "Shift", ep::SHIFTS, ep::SHIFTS);
admin_scoped!(WeekOff, WeekOffDraft, "Week-off", ep::WEEK_OFFS, ep::WEEK_OFFS);
admin_scoped!(Location, LocationDraft, "Location", ep::LOCATIONS, ep::LOCATIONS);

/// Visits are additionally scoped by the acting user.
impl Resource for Visit {
    type Draft = VisitDraft;
    const NAME: &'static str = "Visit";

    fn id(&self) -> EntityId {
        self.id
    }

    fn collection_path(ctx: &TenantContext) -> Result<String, ApiError> {
        Ok(path(ep::VISIT_LIST_CREATE, &[ctx.admin_id()?, ctx.user_id()?]))
    }

    fn item_path(ctx: &TenantContext, id: EntityId) -> Result<String, ApiError> {
        Ok(path(ep::VISIT_DETAIL, &[ctx.admin_id()?, ctx.user_id()?, &id.to_string()]))
    }

    fn draft(&self) -> Self::Draft {
        self.to_draft()
    }
}

/// Invoices switch to multipart when a file is attached.
impl Resource for Invoice {
    type Draft = InvoiceDraft;
    const NAME: &'static str = "Invoice";

    fn id(&self) -> EntityId {
        self.id
    }

    fn collection_path(ctx: &TenantContext) -> Result<String, ApiError> {
        Ok(path(ep::INVOICES, &[ctx.admin_id()?]))
    }

    fn item_path(ctx: &TenantContext, id: EntityId) -> Result<String, ApiError> {
        Ok(path(ep::INVOICES, &[ctx.admin_id()?, &id.to_string()]))
    }

    fn encode(draft: &InvoiceDraft) -> Result<RequestBody, ApiError> {
        let Some(attachment) = &draft.attachment else {
            return RequestBody::json(draft);
        };
        let mut parts = form_fields(draft)?;
        parts.push(FormPart::File {
            name: "attachment".to_string(),
            file_name: attachment.file_name.clone(),
            mime_type: attachment.mime_type.clone(),
            bytes: attachment.bytes.clone(),
        });
        Ok(RequestBody::Multipart(parts))
    }

    fn draft(&self) -> Self::Draft {
        self.to_draft()
    }
}

/// Admins belong to the organization, not to a selected admin.
impl Resource for Admin {
    type Draft = AdminDraft;
    const NAME: &'static str = "Admin";

    fn id(&self) -> EntityId {
        self.id
    }

    fn collection_path(ctx: &TenantContext) -> Result<String, ApiError> {
        Ok(path(ep::ORGANIZATION_ADMINS, &[ctx.organization_id()?]))
    }

    fn item_path(ctx: &TenantContext, id: EntityId) -> Result<String, ApiError> {
        Ok(path(ep::ORGANIZATION_ADMINS, &[ctx.organization_id()?, &id.to_string()]))
    }

    fn draft(&self) -> Self::Draft {
        self.to_draft()
    }
}

/// Flatten a serializable struct into multipart text fields. Nulls are left
/// out; nested values are sent as JSON text.
pub fn form_fields<T: Serialize>(value: &T) -> Result<Vec<FormPart>, ApiError> {
    let serde_json::Value::Object(map) = serde_json::to_value(value)? else {
        return Err(ApiError::Decode("multipart payload must be an object".to_string()));
    };
    Ok(map
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(name, v)| {
            let value = match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            FormPart::Text { name, value }
        })
        .collect())
}
