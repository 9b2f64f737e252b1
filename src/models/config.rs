//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Production API endpoint; overridable for tests and mirrors.
pub const DEFAULT_API_BASE_URL: &str = "https://api.shopdb.ecocitycraft.com/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Basic configuration shared by everything that talks to the API.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
