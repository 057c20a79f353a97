//! Player state read from a JSON file

use std::path::PathBuf;

use amuse_common::{Error, Result};
use async_trait::async_trait;

use super::{PlayerState, StateProvider};

/// Re-reads a state file the player keeps up to date
pub struct FileStateProvider {
    path: PathBuf,
}

impl FileStateProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl StateProvider for FileStateProvider {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn get_snapshot(&self) -> Result<PlayerState> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            Error::Provider(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
