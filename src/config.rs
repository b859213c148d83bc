//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (loaded by
//! `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix for generated short links (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Link lifetime when none is given (default: 30)
//! - `MAX_CODE_ATTEMPTS` - Generated shortcode attempts per creation (default: 5)
//! - `SHORTCODE_LENGTH` - Generated shortcode length (default: 6)
//! - `REMOTE_LOG_URL` - Remote log collector endpoint
//! - `REMOTE_LOG_TOKEN` - Bearer token for the collector (remote logging is
//!   reported as failing locally while unset)
//! - `REMOTE_LOG_TIMEOUT_SECS` - Collector request timeout (default: 5)

use anyhow::Result;
use std::env;
use std::str::FromStr;

use crate::infrastructure::remote_log::DEFAULT_ENDPOINT;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: i64,
    pub max_code_attempts: usize,
    pub shortcode_length: usize,
    pub remote_log_url: String,
    /// Never printed; see [`Config::print_summary`].
    pub remote_log_token: Option<String>,
    pub remote_log_timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let remote_log_url =
            env::var("REMOTE_LOG_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let remote_log_token = env::var("REMOTE_LOG_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes: parse_or("DEFAULT_VALIDITY_MINUTES", 30),
            max_code_attempts: parse_or("MAX_CODE_ATTEMPTS", 5),
            shortcode_length: parse_or("SHORTCODE_LENGTH", 6),
            remote_log_url,
            remote_log_token,
            remote_log_timeout_secs: parse_or("REMOTE_LOG_TIMEOUT_SECS", 5),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` or `remote_log_url` is not an http(s) URL
    /// - `default_validity_minutes` is not positive
    /// - `max_code_attempts` is outside 1..=100
    /// - `shortcode_length` is outside 4..=32
    /// - `remote_log_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !is_http_url(&self.remote_log_url) {
            anyhow::bail!(
                "REMOTE_LOG_URL must start with 'http://' or 'https://', got '{}'",
                self.remote_log_url
            );
        }

        if self.default_validity_minutes <= 0 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be greater than 0, got {}",
                self.default_validity_minutes
            );
        }

        if self.max_code_attempts == 0 || self.max_code_attempts > 100 {
            anyhow::bail!(
                "MAX_CODE_ATTEMPTS must be between 1 and 100, got {}",
                self.max_code_attempts
            );
        }

        if !(4..=32).contains(&self.shortcode_length) {
            anyhow::bail!(
                "SHORTCODE_LENGTH must be between 4 and 32, got {}",
                self.shortcode_length
            );
        }

        if self.remote_log_timeout_secs == 0 {
            anyhow::bail!("REMOTE_LOG_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether remote log forwarding has a token to authenticate with.
    pub fn is_remote_log_enabled(&self) -> bool {
        self.remote_log_token.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!(
            "  Shortcodes: {} chars, {} attempts",
            self.shortcode_length,
            self.max_code_attempts
        );

        match &self.remote_log_token {
            Some(token) => tracing::info!(
                "  Remote log: {} (token {})",
                self.remote_log_url,
                mask_token(token)
            ),
            None => tracing::info!("  Remote log: {} (no token)", self.remote_log_url),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Keeps the first four characters of a token and hides the rest.
fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: 30,
            max_code_attempts: 5,
            shortcode_length: 6,
            remote_log_url: DEFAULT_ENDPOINT.to_string(),
            remote_log_token: None,
            remote_log_timeout_secs: 5,
        }
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abcdefgh"), "abcd***");
        assert_eq!(mask_token("ab"), "ab***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://s.example.com".to_string();

        config.default_validity_minutes = 0;
        assert!(config.validate().is_err());
        config.default_validity_minutes = 30;

        config.max_code_attempts = 0;
        assert!(config.validate().is_err());
        config.max_code_attempts = 5;

        config.shortcode_length = 3;
        assert!(config.validate().is_err());
        config.shortcode_length = 6;

        config.remote_log_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for key in [
                "LISTEN",
                "BASE_URL",
                "LOG_FORMAT",
                "DEFAULT_VALIDITY_MINUTES",
                "MAX_CODE_ATTEMPTS",
                "SHORTCODE_LENGTH",
                "REMOTE_LOG_URL",
                "REMOTE_LOG_TOKEN",
                "REMOTE_LOG_TIMEOUT_SECS",
            ] {
                env::remove_var(key);
            }
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.default_validity_minutes, 30);
        assert_eq!(config.max_code_attempts, 5);
        assert_eq!(config.shortcode_length, 6);
        assert_eq!(config.remote_log_url, DEFAULT_ENDPOINT);
        assert!(!config.is_remote_log_enabled());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DEFAULT_VALIDITY_MINUTES", "90");
            env::set_var("MAX_CODE_ATTEMPTS", "not-a-number");
            env::set_var("REMOTE_LOG_TOKEN", "secret-token");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.default_validity_minutes, 90);
        assert_eq!(config.max_code_attempts, 5);
        assert!(config.is_remote_log_enabled());

        // Cleanup
        unsafe {
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
            env::remove_var("MAX_CODE_ATTEMPTS");
            env::remove_var("REMOTE_LOG_TOKEN");
        }
    }

    #[test]
    #[serial]
    fn test_empty_token_is_ignored() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REMOTE_LOG_TOKEN", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.remote_log_token.is_none());

        unsafe {
            env::remove_var("REMOTE_LOG_TOKEN");
        }
    }
}
