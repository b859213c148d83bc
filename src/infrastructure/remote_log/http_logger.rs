//! HTTP client for the remote log collection service.

use async_trait::async_trait;
use reqwest::header;
use std::time::Duration;
use tracing::{debug, error};

use super::event::{Level, LogEvent, Package, Stack};
use super::sink::{LogSink, RemoteLogError};

/// Default collector endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://20.244.56.144/evaluation-service/logs";

/// Forwards log events to the collector as JSON over HTTP.
///
/// Every request carries `Authorization: Bearer <token>`. Without a token the
/// logger never touches the network: each call reports
/// [`RemoteLogError::MissingToken`] and logs the problem locally.
pub struct RemoteLogger {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl RemoteLogger {
    /// Builds a logger for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteLogError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteLogError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("shortlinks/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Validates loosely typed input and sends it.
    pub async fn log(
        &self,
        stack: &str,
        level: &str,
        package: &str,
        message: &str,
    ) -> Result<(), RemoteLogError> {
        let event = LogEvent::parse(stack, level, package, message).inspect_err(|e| {
            error!(error = %e, "Rejected remote log event");
        })?;
        self.emit(event).await
    }

    pub async fn debug(
        &self,
        stack: Stack,
        package: Package,
        message: &str,
    ) -> Result<(), RemoteLogError> {
        self.emit(LogEvent::new(stack, Level::Debug, package, message)?)
            .await
    }

    pub async fn info(
        &self,
        stack: Stack,
        package: Package,
        message: &str,
    ) -> Result<(), RemoteLogError> {
        self.emit(LogEvent::new(stack, Level::Info, package, message)?)
            .await
    }

    pub async fn warn(
        &self,
        stack: Stack,
        package: Package,
        message: &str,
    ) -> Result<(), RemoteLogError> {
        self.emit(LogEvent::new(stack, Level::Warn, package, message)?)
            .await
    }

    pub async fn error(
        &self,
        stack: Stack,
        package: Package,
        message: &str,
    ) -> Result<(), RemoteLogError> {
        self.emit(LogEvent::new(stack, Level::Error, package, message)?)
            .await
    }

    pub async fn fatal(
        &self,
        stack: Stack,
        package: Package,
        message: &str,
    ) -> Result<(), RemoteLogError> {
        self.emit(LogEvent::new(stack, Level::Fatal, package, message)?)
            .await
    }
}

#[async_trait]
impl LogSink for RemoteLogger {
    async fn emit(&self, event: LogEvent) -> Result<(), RemoteLogError> {
        let Some(token) = self.token.as_deref() else {
            error!("Remote log token not set, event not sent");
            return Err(RemoteLogError::MissingToken);
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&event)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Error sending remote log"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Remote log rejected");
            return Err(RemoteLogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(level = %event.level, package = %event.package, "Remote log sent");
        Ok(())
    }
}
