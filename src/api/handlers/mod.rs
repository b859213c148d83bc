//! HTTP request handlers.
//!
//! Every handler logs its outcome locally through `tracing` and mirrors it
//! to the remote log sink with [`report`].

pub mod health;
pub mod not_found;
pub mod redirect;
pub mod register;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use not_found::not_found_handler;
pub use redirect::redirect_handler;
pub use register::register_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;

use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, report};
use crate::state::AppState;

/// Logs a failed request at a level matching the error class.
///
/// Client errors are warnings; server errors are logged with full detail,
/// which the response itself never carries.
fn log_failure(state: &AppState, package: Package, context: &str, err: &AppError) {
    let level = if err.status_code().is_server_error() {
        tracing::error!(package = %package, error = %err, "{context}");
        Level::Error
    } else {
        tracing::warn!(package = %package, error = %err, "{context}");
        Level::Warn
    };

    report(&state.log_sink, level, package, format!("{context}: {err}"));
}
