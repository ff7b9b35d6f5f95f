//! Page table subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming GET request (path)
//!     → axum Router (one route per table entry, exact match)
//!     → table.rs entry (template name + display vars)
//!     → render engine produces the response body
//! ```
//!
//! # Design Decisions
//! - The table is a static slice, frozen at compile time
//! - Exact path match only: no dynamic segments, no query handling
//! - Each entry carries exactly two display parameters (`id`, `title`);
//!   anything richer belongs in the template itself
//! - Uniqueness of paths is an invariant, enforced by test

pub mod table;

pub use table::{pages, Page};
