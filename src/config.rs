//! Client configuration.
//!
//! The three values that matter to the core are the base address, the API key
//! and the write flag. The remaining knobs have production-friendly defaults
//! and can be overridden from the environment.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Default timeout for ordinary API calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default timeout for log fetches and image pulls, whose payloads can be large.
pub const DEFAULT_LOG_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Immutable connection parameters for one [`crate::PortainerClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    pub write_enabled: bool,
    pub request_timeout: Duration,
    pub log_timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Create a config with writes disabled.
    ///
    /// Exactly one trailing slash is removed from `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = match base_url.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => base_url,
        };
        Self {
            base_url,
            api_key: api_key.into(),
            write_enabled: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_timeout: DEFAULT_LOG_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    /// Load configuration from the environment.
    ///
    /// - `PORTAINER_URL` (required)
    /// - `PORTAINER_API_KEY` (required)
    /// - `PORTAINER_WRITE_ENABLED` (default false)
    /// - `PORTAINER_TIMEOUT_MS` (default 30000)
    /// - `PORTAINER_LOG_TIMEOUT_MS` (default 60000)
    /// - `PORTAINER_INSECURE_TLS` (default false)
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("PORTAINER_URL").map_err(|_| {
            Error::configuration_with_context(
                "PORTAINER_URL is not set",
                ErrorContext::new().with_field_path("PORTAINER_URL"),
            )
        })?;
        let api_key = env::var("PORTAINER_API_KEY").map_err(|_| {
            Error::configuration_with_context(
                "PORTAINER_API_KEY is not set",
                ErrorContext::new().with_field_path("PORTAINER_API_KEY"),
            )
        })?;

        let mut config = Self::new(base_url, api_key)
            .with_write_enabled(env_flag("PORTAINER_WRITE_ENABLED"))
            .with_accept_invalid_certs(env_flag("PORTAINER_INSECURE_TLS"));

        if let Some(ms) = env_millis("PORTAINER_TIMEOUT_MS") {
            config = config.with_request_timeout(ms);
        }
        if let Some(ms) = env_millis("PORTAINER_LOG_TIMEOUT_MS") {
            config = config.with_log_timeout(ms);
        }
        Ok(config)
    }

    pub fn with_write_enabled(mut self, enabled: bool) -> Self {
        self.write_enabled = enabled;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_timeout(mut self, timeout: Duration) -> Self {
        self.log_timeout = timeout;
        self
    }

    /// Accept self-signed certificates (common on single-node Portainer installs).
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Normalized base address (no trailing slash, no API root).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Check that the configuration can produce request URLs.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key must not be empty",
                ErrorContext::new().with_field_path("config.api_key"),
            ));
        }
        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL '{}': {}", self.base_url, e),
                ErrorContext::new().with_field_path("config.base_url"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("unsupported URL scheme '{}'", url.scheme()),
                ErrorContext::new().with_field_path("config.base_url"),
            ));
        }
        if self.request_timeout.is_zero() || self.log_timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeouts must be greater than zero",
                ErrorContext::new().with_field_path("config.request_timeout"),
            ));
        }
        Ok(())
    }
}

// The API key stays out of debug output and therefore out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("write_enabled", &self.write_enabled)
            .field("request_timeout", &self.request_timeout)
            .field("log_timeout", &self.log_timeout)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

fn env_millis(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
