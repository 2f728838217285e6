//! Utility functions and helpers for the blazerize edit proxy.
//!
//! This module provides cross-cutting concerns like structured logging
//! and secret sanitization.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization with security filters.

pub mod logging;
