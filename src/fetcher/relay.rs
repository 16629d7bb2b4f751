use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::fetcher::{FetchError, Fetcher, RelayConfig};

/// Fetches feeds through a relay that takes the target URL as a query parameter.
pub struct RelayFetcher {
    client: Client,
    config: RelayConfig,
}

impl RelayFetcher {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("headwater/{}", env!("CARGO_PKG_VERSION")));

        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Relay URL with `target` encoded into the configured parameter.
    pub fn relay_url(&self, target: &str) -> std::result::Result<Url, FetchError> {
        Url::parse_with_params(&self.config.endpoint, &[(self.config.param.as_str(), target)])
            .map_err(|e| FetchError::InvalidRelay(format!("{}: {}", self.config.endpoint, e)))
    }

    fn transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.config.timeout_secs)
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl Fetcher for RelayFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let relay_url = self.relay_url(url)?;
        tracing::debug!("Fetching {} via {}", url, self.config.endpoint);

        let response = self
            .client
            .get(relay_url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }
}
