//! Log sink trait, error types and the fire-and-forget helper.

use async_trait::async_trait;
use std::sync::Arc;

use super::event::{Level, LogEvent, Package, Stack};

/// Errors that can occur while forwarding a log event.
#[derive(Debug, thiserror::Error)]
pub enum RemoteLogError {
    #[error("authentication token not set")]
    MissingToken,

    #[error("invalid stack '{0}', must be 'backend' or 'frontend'")]
    InvalidStack(String),

    #[error("invalid level '{0}', must be one of: debug, info, warn, error, fatal")]
    InvalidLevel(String),

    #[error("unknown package '{0}'")]
    UnknownPackage(String),

    #[error("package '{package}' is not allowed for stack '{stack}'")]
    PackageNotAllowed { package: Package, stack: Stack },

    #[error("failed to send log event: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("log service responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Destination for structured log events.
///
/// # Implementations
///
/// - [`crate::infrastructure::remote_log::RemoteLogger`] - HTTP client for the log collector
/// - [`crate::infrastructure::remote_log::NullSink`] - Discards every event
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Delivers one event.
    async fn emit(&self, event: LogEvent) -> Result<(), RemoteLogError>;
}

/// A sink that accepts and discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl LogSink for NullSink {
    async fn emit(&self, _event: LogEvent) -> Result<(), RemoteLogError> {
        Ok(())
    }
}

/// Sends a backend event in the background.
///
/// Never blocks the caller and never fails: invalid events and delivery
/// errors are only reported through `tracing`. Must be called from within a
/// Tokio runtime.
pub fn report(sink: &Arc<dyn LogSink>, level: Level, package: Package, message: impl Into<String>) {
    let event = match LogEvent::new(Stack::Backend, level, package, message) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "Dropping invalid remote log event");
            return;
        }
    };

    let sink = sink.clone();
    tokio::spawn(async move {
        if let Err(e) = sink.emit(event).await {
            tracing::debug!(error = %e, "Remote log delivery failed");
        }
    });
}
