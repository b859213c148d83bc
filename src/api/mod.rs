//! HTTP API layer.
//!
//! - [`dto`] - Request/response serialization types
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Tracing and CORS layers
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
