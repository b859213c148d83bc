//! HTTP server initialization and runtime setup.
//!
//! Wires the in-memory stores, the shortcode generator, and the remote log
//! sink into [`AppState`], then serves the router until a shutdown signal.

use crate::application::services::{LinkService, LinkSettings, UserService};
use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::infrastructure::memory::{InMemoryLinkStore, InMemoryUserStore};
use crate::infrastructure::remote_log::{LogSink, RemoteLogger};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomShortcodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the remote log HTTP client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let settings = LinkSettings {
        base_url: config.base_url.clone(),
        default_validity_minutes: config.default_validity_minutes,
        max_attempts: config.max_code_attempts,
    };

    let link_service = LinkService::new(
        Arc::new(InMemoryLinkStore::new()),
        Arc::new(RandomShortcodeGenerator::new(config.shortcode_length)),
        clock.clone(),
        settings,
    );
    let user_service = UserService::new(Arc::new(InMemoryUserStore::new()), clock);

    let logger = RemoteLogger::new(
        config.remote_log_url.clone(),
        config.remote_log_token.clone(),
        Duration::from_secs(config.remote_log_timeout_secs),
    )
    .context("failed to build remote log client")?;
    if !logger.has_token() {
        tracing::warn!("REMOTE_LOG_TOKEN is not set; remote log events will be dropped");
    }
    let log_sink: Arc<dyn LogSink> = Arc::new(logger);

    Ok(AppState::new(
        Arc::new(link_service),
        Arc::new(user_service),
        log_sink,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            base_url: "http://s.test".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: 10,
            max_code_attempts: 3,
            shortcode_length: 8,
            remote_log_url: "http://127.0.0.1:9/logs".to_string(),
            remote_log_token: None,
            remote_log_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn test_build_state_applies_config() {
        let state = build_state(&config()).unwrap();

        let link = state
            .link_service
            .create("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.shortcode.len(), 8);
        assert_eq!(link.expires_at - link.created_at, chrono::Duration::minutes(10));
        assert_eq!(
            state.link_service.short_url(&link.shortcode),
            format!("http://s.test/{}", link.shortcode)
        );
    }
}
