//! Client configuration.

use std::env;

/// Default backend address when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend address.
pub const API_URL_ENV: &str = "ASTRARIUM_API_URL";

/// Environment variable overriding the request timeout (seconds).
pub const TIMEOUT_ENV: &str = "ASTRARIUM_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Read `ASTRARIUM_API_URL` and `ASTRARIUM_TIMEOUT_SECS`, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = normalize_base_url(url);
        }
        match lookup(TIMEOUT_ENV).map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => config.timeout_secs = secs,
            Some(_) => log::warn!("Ignoring invalid {}", TIMEOUT_ENV),
            None => {}
        }
        config
    }

    /// Full URL for an API path such as `/skills/my-skills`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
