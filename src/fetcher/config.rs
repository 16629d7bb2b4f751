use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.allorigins.win/raw";

/// Relay used to fetch feed bodies for preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Relay base URL; the target feed URL is appended as a query parameter
    pub endpoint: String,

    /// Name of the query parameter carrying the target URL (default: "url")
    pub param: String,

    /// Request timeout in seconds (default: 15)
    pub timeout_secs: u64,

    /// User agent string to send
    pub user_agent: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            param: "url".to_string(),
            timeout_secs: 15,
            user_agent: None,
        }
    }
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
