//! Player state fetched over HTTP

use amuse_common::{Error, Result};
use async_trait::async_trait;
use tracing::debug;

use super::{PlayerState, StateProvider};

/// Fetches the player state document from a URL on every read
pub struct HttpStateProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpStateProvider {
    pub fn new(url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("amuse-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Provider(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl StateProvider for HttpStateProvider {
    fn describe(&self) -> String {
        format!("http {}", self.url)
    }

    async fn get_snapshot(&self) -> Result<PlayerState> {
        debug!("Fetching player state from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Provider(format!("GET {} failed: {}", self.url, e)))?;

        response
            .json::<PlayerState>()
            .await
            .map_err(|e| Error::Provider(format!("Invalid player state from {}: {}", self.url, e)))
    }
}
