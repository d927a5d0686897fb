//! API Client
//!
//! Typed calls against the backend. A client is built per action from the
//! transport and the current [`TenantContext`]; every call validates its
//! payload and resolves its path before anything goes on the wire.

use serde::de::DeserializeOwned;

use super::endpoints::{self as ep, path};
use super::envelope::{decode_ack, decode_data, decode_page, error_message, Ack, Page};
use super::query::ListQuery;
use super::resource::Resource;
use super::transport::{ApiRequest, ApiResponse, Method, RequestBody, ReqwestTransport, Transport};
use crate::domain::{
    AttendanceRecord, Coordinates, Credentials, Employee, EntityId, LeaveApplication, LeaveStatusUpdate, LoginData,
};
use crate::error::{ApiError, INVALID_CREDENTIALS_MESSAGE};
use crate::session::TenantContext;
use crate::validation::Validate;

#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    ctx: TenantContext,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, ctx: TenantContext) -> Self {
        Self { transport, ctx }
    }

    // ========================
    // Plumbing
    // ========================

    async fn execute(
        &self,
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        body: RequestBody,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest { method, path, query, bearer: Some(self.ctx.access_token.clone()), body };
        let response = self.transport.send(request).await?;
        check_status(response)
    }

    async fn fetch_page<D: DeserializeOwned>(&self, path: String, query: &ListQuery) -> Result<Page<D>, ApiError> {
        let response = self.execute(Method::Get, path, query.to_pairs(), RequestBody::Empty).await?;
        decode_page(&response.body)
    }

    // ========================
    // Generic CRUD
    // ========================

    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Page<R>, ApiError> {
        let page = self.fetch_page(R::collection_path(&self.ctx)?, query).await?;
        tracing::debug!(resource = R::NAME, rows = page.results.len(), count = page.count, "list fetched");
        Ok(page)
    }

    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<Ack, ApiError> {
        draft.validate()?;
        let path = R::collection_path(&self.ctx)?;
        let response = self.execute(Method::Post, path, Vec::new(), R::encode(draft)?).await?;
        tracing::info!(resource = R::NAME, "created");
        decode_ack(&response.body)
    }

    pub async fn update<R: Resource>(&self, id: EntityId, draft: &R::Draft) -> Result<Ack, ApiError> {
        draft.validate()?;
        let path = R::item_path(&self.ctx, id)?;
        let response = self.execute(Method::Put, path, Vec::new(), R::encode(draft)?).await?;
        tracing::info!(resource = R::NAME, id, "updated");
        decode_ack(&response.body)
    }

    pub async fn delete<R: Resource>(&self, id: EntityId) -> Result<Ack, ApiError> {
        let path = R::item_path(&self.ctx, id)?;
        let response = self.execute(Method::Delete, path, Vec::new(), RequestBody::Empty).await?;
        tracing::info!(resource = R::NAME, id, "deleted");
        decode_ack(&response.body)
    }

    // ========================
    // Read-only lists
    // ========================

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let path = path(ep::EMPLOYEE_LIST, &[self.ctx.admin_id()?]);
        Ok(self.fetch_page(path, &ListQuery::default()).await?.results)
    }

    pub async fn list_attendance(&self, query: &ListQuery) -> Result<Page<AttendanceRecord>, ApiError> {
        let path = path(ep::ATTENDANCE_LIST, &[self.ctx.admin_id()?]);
        self.fetch_page(path, query).await
    }

    pub async fn list_leave_applications(&self, query: &ListQuery) -> Result<Page<LeaveApplication>, ApiError> {
        let path = path(ep::LEAVE_APPLICATIONS, &[self.ctx.admin_id()?]);
        self.fetch_page(path, query).await
    }

    // ========================
    // Actions
    // ========================

    /// Approve or reject a pending application.
    pub async fn set_leave_status(&self, id: EntityId, update: &LeaveStatusUpdate) -> Result<Ack, ApiError> {
        update.validate()?;
        let path = path(ep::LEAVE_APPLICATIONS, &[self.ctx.admin_id()?, &id.to_string()]);
        let response = self.execute(Method::Patch, path, Vec::new(), RequestBody::json(update)?).await?;
        tracing::info!(id, status = update.status.as_str(), "leave status changed");
        decode_ack(&response.body)
    }

    pub async fn visit_check_in(&self, visit_id: EntityId, at: Coordinates) -> Result<Ack, ApiError> {
        self.visit_checkpoint(ep::VISIT_CHECK_IN, visit_id, at).await
    }

    pub async fn visit_check_out(&self, visit_id: EntityId, at: Coordinates) -> Result<Ack, ApiError> {
        self.visit_checkpoint(ep::VISIT_CHECK_OUT, visit_id, at).await
    }

    async fn visit_checkpoint(&self, route: &str, visit_id: EntityId, at: Coordinates) -> Result<Ack, ApiError> {
        at.validate()?;
        let path = path(route, &[self.ctx.admin_id()?, self.ctx.user_id()?, &visit_id.to_string()]);
        let response = self.execute(Method::Post, path, Vec::new(), RequestBody::json(&at)?).await?;
        tracing::info!(route, visit_id, "visit checkpoint recorded");
        decode_ack(&response.body)
    }
}

/// Sign in. No session exists yet, so this bypasses [`ApiClient`].
///
/// A 401 here means bad credentials, not an expired session.
pub async fn login<T: Transport>(transport: &T, credentials: &Credentials) -> Result<LoginData, ApiError> {
    credentials.validate()?;
    let mut request = ApiRequest::new(Method::Post, ep::LOGIN);
    request.body = RequestBody::json(credentials)?;
    let response = check_status(transport.send(request).await?).map_err(|err| match err {
        ApiError::Unauthorized { message } => ApiError::Rejected {
            message: message.unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string()),
        },
        other => other,
    })?;
    decode_data(&response.body)
}

/// Map non-2xx responses to errors, keeping the backend's message.
fn check_status(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = error_message(&response.body);
    tracing::warn!(status = response.status, message = ?message, "request failed");
    match response.status {
        401 => Err(ApiError::Unauthorized { message }),
        status => Err(ApiError::Status { status, message }),
    }
}
