//! Infrastructure layer for storage and external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-memory store implementations
//! - [`remote_log`] - Client for the remote log collection service

pub mod memory;
pub mod remote_log;
