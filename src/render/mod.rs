//! Template rendering subsystem.
//!
//! # Data Flow
//! ```text
//! (template name, var map)
//!     → engine.rs (read file from template root)
//!     → substitute {{ name }} placeholders
//!     → HTML body, or RenderError
//! ```
//!
//! # Design Decisions
//! - Templates are read from disk at render time; a missing file is a
//!   render-time failure, not a startup failure
//! - Placeholder substitution only — no inheritance, loops, or escaping
//! - Variables absent from the map render as the empty string

pub mod engine;

pub use engine::{RenderError, Templates};
