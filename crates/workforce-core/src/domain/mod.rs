//! Domain Layer
//!
//! Typed mirrors of the backend's resources and the form payloads that
//! create or update them. Decoding happens at the network boundary so the
//! UI never handles untyped JSON.

mod admin;
mod attendance;
mod auth;
mod contact;
mod invoice;
mod leave;
mod location;
mod shift;
mod visit;
mod week_off;
pub mod wire;

pub use admin::{Admin, AdminDraft};
pub use attendance::{AttendanceRecord, Employee};
pub use auth::{Credentials, LoginData};
pub use contact::{Contact, ContactDraft};
pub use invoice::{Attachment, Invoice, InvoiceDraft, InvoiceStatus};
pub use leave::{LeaveApplication, LeavePolicy, LeavePolicyDraft, LeaveStatus, LeaveStatusUpdate, LeaveType, LeaveTypeDraft};
pub use location::{Coordinates, Location, LocationDraft};
pub use shift::{Shift, ShiftDraft};
pub use visit::{Visit, VisitDraft, VisitStatus};
pub use week_off::{Day, WeekOff, WeekOffDraft};

/// Backend primary key.
pub type EntityId = u64;

/// Normalise a status word: lowercase, spaces and dashes to underscores.
pub(crate) fn status_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}
