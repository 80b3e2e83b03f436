//! Runtime settings for the inventory client.

use crate::store::FilterMode;
use std::time::Duration;
use url::Url;

/// Development server the Products API is served from by default.
pub const DEFAULT_API_URL: &str = "https://localhost:7083";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL; `api/Products` is resolved against it.
    pub api_base: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Accept self-signed TLS certificates, as served by the local dev server.
    pub accept_invalid_certs: bool,
    pub filter_mode: FilterMode,
    /// Capacity of the controller's command channel.
    pub channel_capacity: usize,
}

impl Config {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
            filter_mode: FilterMode::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let api_base = Url::parse(DEFAULT_API_URL).expect("default API URL is valid");
        Self::new(api_base)
    }
}
