//! Link creation, redirection and statistics service.

use axum::http::HeaderValue;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::ShortcodeGenerator;

/// Tunables for [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Prefix of every short link, without trailing slash.
    pub base_url: String,
    /// Validity applied when the caller does not supply one.
    pub default_validity_minutes: i64,
    /// Generated-code attempts before giving up.
    pub max_attempts: usize,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            default_validity_minutes: 30,
            max_attempts: 5,
        }
    }
}

/// Creates short links and looks them up for redirects and statistics.
pub struct LinkService<L: LinkStore> {
    store: Arc<L>,
    generator: Arc<dyn ShortcodeGenerator>,
    clock: Arc<dyn Clock>,
    settings: LinkSettings,
}

impl<L: LinkStore> LinkService<L> {
    pub fn new(
        store: Arc<L>,
        generator: Arc<dyn ShortcodeGenerator>,
        clock: Arc<dyn Clock>,
        settings: LinkSettings,
    ) -> Self {
        Self {
            store,
            generator,
            clock,
            settings,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Destination URL, must not be blank
    /// - `validity_minutes` - Lifetime in minutes, defaults to the configured value
    /// - `shortcode` - Caller-chosen code; generated when `None`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `target_url` is blank
    /// - `validity_minutes` is zero, negative or too large
    /// - `shortcode` is supplied but blank
    ///
    /// Returns [`AppError::Conflict`] if the caller-chosen code is taken.
    /// Returns [`AppError::Exhausted`] if no free code was generated within
    /// the attempt budget.
    pub async fn create(
        &self,
        target_url: String,
        validity_minutes: Option<i64>,
        shortcode: Option<String>,
    ) -> Result<Link, AppError> {
        if target_url.trim().is_empty() {
            return Err(AppError::validation("URL is required"));
        }
        if HeaderValue::try_from(target_url.as_str()).is_err() {
            return Err(AppError::validation("URL contains invalid characters"));
        }

        let created_at = self.clock.now();
        let expires_at = self.expiry_for(created_at, validity_minutes)?;

        match shortcode {
            Some(code) => {
                if code.trim().is_empty() {
                    return Err(AppError::validation("Shortcode must not be empty"));
                }

                let link = Link::new(code, target_url, created_at, expires_at);
                if !self.store.insert_if_absent(link.clone()).await? {
                    return Err(AppError::conflict("Shortcode already exists"));
                }
                Ok(link)
            }
            None => self.insert_generated(target_url, created_at, expires_at).await,
        }
    }

    /// Resolves a shortcode for redirection and counts the click.
    ///
    /// The returned snapshot includes the click recorded by this call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Expired`] if the link is past its expiry; the
    /// click counter is left untouched in that case.
    pub async fn resolve(&self, shortcode: &str) -> Result<Link, AppError> {
        let mut link = self.find(shortcode).await?;

        if link.is_expired_at(self.clock.now()) {
            return Err(AppError::expired("Short URL has expired"));
        }

        if !self.store.increment_clicks(shortcode).await? {
            return Err(AppError::internal(format!(
                "link '{shortcode}' disappeared before its click was counted"
            )));
        }

        link.click_count += 1;
        Ok(link)
    }

    /// Returns the stored link regardless of its expiry state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn stats(&self, shortcode: &str) -> Result<Link, AppError> {
        self.find(shortcode).await
    }

    /// Number of stored links.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        self.store.count().await
    }

    /// Full short URL for a code.
    pub fn short_url(&self, shortcode: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            shortcode
        )
    }

    async fn find(&self, shortcode: &str) -> Result<Link, AppError> {
        self.store
            .get(shortcode)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))
    }

    fn expiry_for(
        &self,
        created_at: DateTime<Utc>,
        validity_minutes: Option<i64>,
    ) -> Result<DateTime<Utc>, AppError> {
        let minutes = match validity_minutes {
            Some(m) if m <= 0 => {
                return Err(AppError::validation(
                    "Validity must be a positive number of minutes",
                ));
            }
            Some(m) => m,
            None => self.settings.default_validity_minutes,
        };

        Duration::try_minutes(minutes)
            .and_then(|validity| created_at.checked_add_signed(validity))
            .ok_or_else(|| AppError::validation("Validity is too large"))
    }

    /// Claims a generated code, retrying on collision.
    async fn insert_generated(
        &self,
        target_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        let attempts = self.settings.max_attempts;

        for attempt in 1..=attempts {
            let link = Link::new(
                self.generator.generate(),
                target_url.clone(),
                created_at,
                expires_at,
            );

            if self.store.insert_if_absent(link.clone()).await? {
                return Ok(link);
            }

            debug!(attempt, shortcode = %link.shortcode, "Generated shortcode collided");
        }

        Err(AppError::Exhausted { attempts })
    }
}
