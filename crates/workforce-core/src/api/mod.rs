//! REST API Layer
//!
//! - endpoints: path builders
//! - envelope: `{ status, message, data }` decoding and pages
//! - transport: the HTTP seam (reqwest in production)
//! - resource: entity-to-endpoint mapping
//! - client: typed calls scoped by a tenant context

mod client;
mod envelope;
pub mod endpoints;
mod query;
mod resource;
mod transport;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod tests;

pub use client::{login, ApiClient};
pub use envelope::{Ack, Envelope, EnvelopeStatus, Page};
pub use query::ListQuery;
pub use resource::{form_fields, Resource};
pub use transport::{ApiRequest, ApiResponse, FormPart, Method, RequestBody, ReqwestTransport, Transport};
