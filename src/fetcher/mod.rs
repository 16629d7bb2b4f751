pub mod config;
pub mod preview;
pub mod relay;

use async_trait::async_trait;
use thiserror::Error;

pub use config::RelayConfig;
pub use preview::{fallback_document, fetch_preview, FallbackContext};
pub use relay::RelayFetcher;

/// Why a feed body could not be retrieved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid relay endpoint: {0}")]
    InvalidRelay(String),
}

#[async_trait]
pub trait Fetcher {
    /// Fetch the raw body of the feed at `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
