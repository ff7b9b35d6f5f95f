//! Observability subsystem.
//!
//! Structured logging only: per-request logging comes from the HTTP trace
//! layer, render failures are logged at error level by the page handler.
//! There is no metrics endpoint.

pub mod logging;
