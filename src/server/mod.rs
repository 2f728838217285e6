//! Axum-based HTTP server for the blazer photo editor.
//!
//! This module sets up the HTTP server, configures routes, and handles
//! incoming requests: the embedded upload page, the `/api/edit` proxy to
//! the upstream image-edit API, the health probe, and the miniapp manifest.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (edit, health, manifest).
//! - `page`: The embedded single-page upload client.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod page;
mod routes;

pub use routes::{create_router, AppState};
