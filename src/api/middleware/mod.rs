//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Request/response spans
//! - [`cors`] - Cross-origin access

pub mod cors;
pub mod tracing;
