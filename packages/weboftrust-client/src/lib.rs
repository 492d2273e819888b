//! Web of Trust reputation API client.
//!
//! Interprets the service's compact, positional lookup responses as typed
//! [`Website`] models and answers policy questions about them: is the site
//! trustworthy, is it suitable for children, which categories and
//! blacklists is it on.
//!
//! # Example
//!
//! ```rust,ignore
//! use weboftrust_client::{Category, WebOfTrustClient};
//!
//! let client = WebOfTrustClient::from_env()?;
//!
//! let websites = client.lookup(&["example.com", "example.org"]).await?;
//! for (host, site) in &websites {
//!     let trusted = site.is_trustworthy_with(60, 20)?;
//!     let spammy = site.is_in_category(Category::Spam);
//!     println!("{host}: trusted={trusted} spam={spammy} blacklisted={}", site.is_blacklisted());
//! }
//! ```
//!
//! Responses obtained some other way can be interpreted directly with
//! [`ResponseParser::parse`].

pub mod config;
pub mod error;
pub mod models;
pub mod parser;

pub use config::{ApiKey, WotConfig};
pub use error::{MissingMeasurement, ParseError, Result, UnknownCategory, WotError};
pub use models::{Axis, Category, CategoryBand, Component, Website};
pub use parser::{ResponseParser, WebsiteMap};

use serde_json::Value;
use url::Url;

/// Path of the bulk lookup operation, relative to the base URL.
const LOOKUP_PATH: &str = "0.4/public_link_json2";

/// Thin HTTP client for the bulk lookup operation.
#[derive(Debug, Clone)]
pub struct WebOfTrustClient {
    client: reqwest::Client,
    config: WotConfig,
}

impl WebOfTrustClient {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self::from_config(WotConfig::new(api_key))
    }

    pub fn from_config(config: WotConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables (see [`WotConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(WotConfig::from_env()?))
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, TLS settings).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn config(&self) -> &WotConfig {
        &self.config
    }

    /// Build the lookup URL for `hosts`.
    ///
    /// The API expects every host followed by a `/`, e.g. `a.com/b.org/`.
    /// The returned URL carries the API key; do not log it.
    pub fn lookup_url<S: AsRef<str>>(&self, hosts: &[S]) -> Result<Url> {
        let hosts: String = hosts
            .iter()
            .map(|host| format!("{}/", host.as_ref()))
            .collect();

        let mut url = Url::parse(&self.config.base_url)?.join(LOOKUP_PATH)?;
        url.query_pairs_mut()
            .append_pair("hosts", &hosts)
            .append_pair("key", self.config.api_key.expose());
        Ok(url)
    }

    /// Fetch the lookup response for `hosts`, decoded but not interpreted.
    ///
    /// A body that is not JSON is [`ParseError::Json`].
    pub async fn lookup_raw<S: AsRef<str>>(&self, hosts: &[S]) -> Result<Value> {
        let url = self.lookup_url(hosts)?;
        tracing::debug!(hosts = hosts.len(), "Sending Web of Trust lookup");

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Web of Trust lookup failed");
            return Err(WotError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let response: Value = serde_json::from_str(&body).map_err(ParseError::from)?;
        Ok(response)
    }

    /// Look up `hosts` and interpret the response.
    ///
    /// Result keys are the keys the service used for each host, in response
    /// order. An empty host list returns an empty map without a request.
    pub async fn lookup<S: AsRef<str>>(&self, hosts: &[S]) -> Result<WebsiteMap> {
        if hosts.is_empty() {
            return Ok(WebsiteMap::new());
        }

        tracing::info!(hosts = hosts.len(), "Looking up site reputations");
        let response = self.lookup_raw(hosts).await?;
        let websites = ResponseParser::parse(&response)?;
        tracing::info!(count = websites.len(), "Fetched site reputations");

        Ok(websites)
    }
}
