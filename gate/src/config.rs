//! API configuration: base address, per-call deadline, login destination.
//!
//! The canonical deployment serves the console and the API from the same
//! origin, so the default base address is the empty relative path. Absolute
//! addresses are accepted when set explicitly but are logged as a divergence.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use url::Url;

use crate::LOGIN_PATH;

pub const DEFAULT_BASE_URL: &str = "";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const BASE_URL_ENV: &str = "HEXAUTH_BASE_URL";
pub const TIMEOUT_MS_ENV: &str = "HEXAUTH_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL `{0}`: expected empty, a `/`-prefixed path, or an absolute http(s) URL")]
    InvalidBaseUrl(String),
    #[error("invalid {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// How the base address was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseKind {
    /// Same-origin path (or empty).
    Relative,
    /// Explicit `scheme://host[:port]` address.
    Absolute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub login_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            login_path: LOGIN_PATH.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Build config from `HEXAUTH_BASE_URL` and `HEXAUTH_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base) = lookup(BASE_URL_ENV) {
            config.base_url = base.trim().to_owned();
        }
        if let Some(raw) = lookup(TIMEOUT_MS_ENV) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber { var: TIMEOUT_MS_ENV, value: raw.clone() })?;
            config.timeout = Duration::from_millis(ms);
        }
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the base address and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on a zero timeout or an unusable base address.
    pub fn validate(&self) -> Result<BaseKind, ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        let kind = base_kind(&self.base_url)?;
        if kind == BaseKind::Absolute {
            log::warn!(
                "api base url {} is absolute; same-origin relative addressing is the canonical layout",
                self.base_url
            );
        }
        Ok(kind)
    }

    /// Join the base address, `path`, and an encoded query string.
    #[must_use]
    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> String {
        let base = self.base_url.trim_end_matches('/');
        let mut url = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .finish();
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encoded);
        }
        url
    }
}

/// Classify a base address, rejecting anything that is neither a same-origin
/// path nor an absolute http(s) URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for unusable values.
pub fn base_kind(base_url: &str) -> Result<BaseKind, ConfigError> {
    if base_url.is_empty() || (base_url.starts_with('/') && !base_url.starts_with("//")) {
        return Ok(BaseKind::Relative);
    }
    match Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(BaseKind::Absolute),
        _ => Err(ConfigError::InvalidBaseUrl(base_url.to_owned())),
    }
}
