//! Personal Website Server
//!
//! A small static-site server built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                              ┌──────────────────────────────────────────────┐
//!                              │                 SITE SERVER                   │
//!                              │                                               │
//!     Client Request           │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!     ─────────────────────────┼─▶│  http   │───▶│  pages  │───▶│  render  │  │
//!                              │  │ server  │    │  table  │    │  engine  │  │
//!                              │  └─────────┘    └─────────┘    └────┬─────┘  │
//!                              │       │                             │        │
//!                              │       │ /static/*                   ▼        │
//!                              │       ▼                      ┌──────────┐    │
//!     Client Response          │  ┌─────────┐                 │ template │    │
//!     ◀────────────────────────┼──│ServeDir │                 │  files   │    │
//!                              │  └─────────┘                 └──────────┘    │
//!                              │                                               │
//!                              │  ┌─────────────────────────────────────────┐ │
//!                              │  │           Cross-Cutting Concerns         │ │
//!                              │  │  ┌────────┐ ┌───────────┐ ┌───────────┐ │ │
//!                              │  │  │ config │ │ observa-  │ │ lifecycle │ │ │
//!                              │  │  │        │ │ bility    │ │           │ │ │
//!                              │  │  └────────┘ └───────────┘ └───────────┘ │ │
//!                              │  └─────────────────────────────────────────┘ │
//!                              └──────────────────────────────────────────────┘
//! ```
//!
//! Every route is a one-line entry in the page table: a URL path mapped to a
//! template file plus the two display strings (`id`, `title`) interpolated
//! into it. Static assets are served from a configured directory under a
//! configured URL prefix. Everything else — 404s for unknown paths, 405s for
//! non-GET methods — is framework behavior.

// Core subsystems
pub mod config;
pub mod http;
pub mod pages;
pub mod render;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
