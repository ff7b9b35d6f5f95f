//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Shutdown is a broadcast: the server and any future background tasks
//!   subscribe to the same coordinator
//! - No teardown beyond draining; the process owns no persistent state

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
