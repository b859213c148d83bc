//! Structured log forwarding to the remote log collection service.
//!
//! Events are validated locally ([`LogEvent`]) before they are sent. Request
//! handlers use [`report`], which forwards in the background and never lets a
//! logging failure affect the request.

mod event;
mod http_logger;
mod sink;

pub use event::{Level, LogEvent, Package, Stack};
pub use http_logger::{DEFAULT_ENDPOINT, RemoteLogger};
pub use sink::{LogSink, NullSink, RemoteLogError, report};
