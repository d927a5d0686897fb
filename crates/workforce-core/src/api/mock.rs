//! Scripted transport for tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::ApiError;

type Handler = dyn Fn(&ApiRequest) -> ApiResponse;

/// Records every request and answers through a handler closure.
#[derive(Clone)]
pub struct MockTransport {
    handler: Rc<Handler>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new(handler: impl Fn(&ApiRequest) -> ApiResponse + 'static) -> Self {
        Self { handler: Rc::new(handler), sent: Rc::new(RefCell::new(Vec::new())) }
    }

    /// Answers every request with the same status and body.
    pub fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| ApiResponse { status, body: body.clone() })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = (self.handler)(&request);
        self.sent.borrow_mut().push(request);
        Ok(response)
    }
}

pub fn ok(body: serde_json::Value) -> ApiResponse {
    ApiResponse { status: 200, body: body.to_string() }
}
