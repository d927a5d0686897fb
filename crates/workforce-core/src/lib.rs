//! Workforce Core
//!
//! Everything below the console's views:
//! - domain: typed resources and their form payloads
//! - validation: client-side form checks
//! - session: stored session, tenant resolution, admin auto-selection
//! - api: REST client over a pluggable transport
//! - crud: the fetch / mutate / re-fetch loop shared by list screens
//! - config: start-up configuration

pub mod api;
pub mod config;
pub mod crud;
pub mod domain;
pub mod error;
pub mod session;
pub mod validation;

pub use api::{ApiClient, ListQuery, Page, Resource, ReqwestTransport};
pub use config::AppConfig;
pub use error::ApiError;
pub use session::{Role, Session, SessionStore, TenantContext};
pub use validation::{Validate, ValidationError};
