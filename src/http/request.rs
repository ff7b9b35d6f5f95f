//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Stamp it into the `x-request-id` header as early as possible
//!
//! # Design Decisions
//! - The ID is set on the request and propagated to the response, so a
//!   client report can be matched against the server log

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header the request ID travels in.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces a fresh UUID v4 for each incoming request.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
