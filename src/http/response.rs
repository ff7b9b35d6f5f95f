//! Error responses.
//!
//! # Responsibilities
//! - Produce the 404 page for unmatched paths
//! - Map render failures to a 500 response
//!
//! # Design Decisions
//! - Error bodies are small inline HTML, independent of the template
//!   directory: a broken template tree must not break the error pages
//! - Non-GET methods on registered paths are rejected by the framework
//!   (405), not here

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

const NOT_FOUND_BODY: &str = "<!DOCTYPE html>\n<html>\n<head><title>404 Not Found</title></head>\n<body><h1>Not Found</h1><p>There's nothing at this address.</p></body>\n</html>\n";

const SERVER_ERROR_BODY: &str = "<!DOCTYPE html>\n<html>\n<head><title>500 Internal Server Error</title></head>\n<body><h1>Internal Server Error</h1><p>Something went wrong rendering this page.</p></body>\n</html>\n";

/// Fallback handler for paths not present in the page table.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_BODY)).into_response()
}

/// Response for a page whose template failed to render.
pub fn render_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_BODY)).into_response()
}
