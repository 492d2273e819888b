//! Client configuration and credential handling.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::{Result, WotError};

/// Base URL of the public Web of Trust API.
pub const DEFAULT_BASE_URL: &str = "http://api.mywot.com/";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "WOT_API_KEY";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "WOT_BASE_URL";

/// Web of Trust API key.
///
/// Wrapped in `secrecy::SecretBox` so it never shows up in debug output,
/// logs or error messages.
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretBox::new(key.into().into_boxed_str()))
    }

    /// Only call this when building the request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Settings for [`WebOfTrustClient`](crate::WebOfTrustClient).
#[derive(Debug, Clone)]
pub struct WotConfig {
    /// Sent as the `key` query parameter
    pub api_key: ApiKey,

    /// Lookup paths are joined onto this, so it should end with `/`
    pub base_url: String,
}

impl WotConfig {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load from `WOT_API_KEY` and, if set, `WOT_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = var(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WotError::Config(format!("{} not set", API_KEY_ENV)))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = var(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_api_key_not_in_debug_or_display() {
        let key = ApiKey::new("0123456789abcdef");
        assert_eq!(format!("{:?}", key), "[REDACTED]");
        assert_eq!(format!("{}", key), "[REDACTED]");
        assert_eq!(key.expose(), "0123456789abcdef");
    }

    #[test]
    fn test_config_debug_hides_key() {
        let config = WotConfig::new("0123456789abcdef");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("0123456789"));
        assert!(debug.contains("api.mywot.com"));
    }

    #[test]
    fn test_from_vars_uses_default_base_url() {
        let config = WotConfig::from_vars(vars(&[(API_KEY_ENV, "secret")])).unwrap();
        assert_eq!(config.api_key.expose(), "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_vars_base_url_override() {
        let config = WotConfig::from_vars(vars(&[
            (API_KEY_ENV, "secret"),
            (BASE_URL_ENV, "http://localhost:8080/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/");
    }

    #[test]
    fn test_from_vars_requires_key() {
        assert!(matches!(
            WotConfig::from_vars(vars(&[])),
            Err(WotError::Config(_))
        ));
        assert!(matches!(
            WotConfig::from_vars(vars(&[(API_KEY_ENV, "  ")])),
            Err(WotError::Config(_))
        ));
    }
}
