//! Player state providers
//!
//! The live player is owned by another process. The server only ever reads
//! it, once per request, through a [`StateProvider`].

use std::sync::Arc;

use amuse_common::{ProviderConfig, Result};
use async_trait::async_trait;

mod file;
mod http;
mod state;

pub use file::FileStateProvider;
pub use http::HttpStateProvider;
pub use state::{AlbumRecord, ArtistRecord, PlayerState, TrackRecord};

/// Read-only source of live player state
#[async_trait]
pub trait StateProvider: Send + Sync {
    /// Short label for logs
    fn describe(&self) -> String;

    /// Read the player as it is right now. May wait on another process.
    async fn get_snapshot(&self) -> Result<PlayerState>;
}

/// Build the provider selected by configuration
pub fn from_config(config: &ProviderConfig) -> Result<Arc<dyn StateProvider>> {
    let provider: Arc<dyn StateProvider> = match config {
        ProviderConfig::Http { url } => Arc::new(HttpStateProvider::new(url.clone())?),
        ProviderConfig::File { path } => Arc::new(FileStateProvider::new(path.clone())),
    };
    Ok(provider)
}
