//! Configuration loading
//!
//! Resolution order (highest first):
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default
//!
//! Levels 1 and 2 are applied by the binary on top of the [`ServerConfig`]
//! returned here.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Port expected by now-playing widget clients
pub const DEFAULT_PORT: u16 = 9863;

/// Loopback only unless configured otherwise
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where live player state is read from
    pub provider: ProviderConfig,
    /// Upper bound on a single provider read; `None` waits indefinitely
    pub provider_timeout_ms: Option<u64>,
}

/// State provider selection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// Fetch player state JSON from an HTTP endpoint
    Http { url: String },
    /// Read player state JSON from a file the player keeps up to date
    File { path: PathBuf },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            provider: ProviderConfig::default(),
            provider_timeout_ms: None,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::File {
            path: default_state_file(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from TOML text; absent keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the platform config file is
    /// tried; if it is missing, defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            Some(path) => {
                warn!(
                    "No config file at {}, using compiled defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                warn!("Could not determine config directory, using compiled defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject values that cannot work at runtime
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }
        match &self.provider {
            ProviderConfig::Http { url } if url.trim().is_empty() => {
                Err(Error::Config("provider url must not be empty".to_string()))
            }
            ProviderConfig::File { path } if path.as_os_str().is_empty() => {
                Err(Error::Config("provider path must not be empty".to_string()))
            }
            _ => Ok(()),
        }
    }

    /// `host:port` string for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn provider_timeout(&self) -> Option<Duration> {
        self.provider_timeout_ms.map(Duration::from_millis)
    }
}

/// Platform config file location (`<config_dir>/amuse/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("amuse").join("config.toml"))
}

/// Default player state file (`<data_local_dir>/amuse/player-state.json`)
fn default_state_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("amuse"))
        .unwrap_or_else(|| PathBuf::from("./amuse_data"))
        .join("player-state.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 9863);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.bind_addr(), "127.0.0.1:9863");
        assert!(config.provider_timeout().is_none());
        assert!(matches!(config.provider, ProviderConfig::File { .. }));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_http_provider_from_toml() {
        let config = ServerConfig::from_toml_str(
            r#"
            port = 9900
            provider_timeout_ms = 1500

            [provider]
            kind = "http"
            url = "http://127.0.0.1:27232/player"
            "#,
        )
        .unwrap();

        assert_eq!(config.port, 9900);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.provider_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(
            config.provider,
            ProviderConfig::Http {
                url: "http://127.0.0.1:27232/player".to_string()
            }
        );
    }

    #[test]
    fn test_file_provider_from_toml() {
        let config = ServerConfig::from_toml_str(
            r#"
            [provider]
            kind = "file"
            path = "/run/player/state.json"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.provider,
            ProviderConfig::File {
                path: PathBuf::from("/run/player/state.json")
            }
        );
    }

    #[test]
    fn test_unknown_provider_kind_rejected() {
        let result = ServerConfig::from_toml_str(
            r#"
            [provider]
            kind = "carrier-pigeon"
            "#,
        );
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = ServerConfig::from_toml_str(
            r#"
            [provider]
            kind = "http"
            url = ""
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"0.0.0.0\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = ServerConfig::load(Some(&missing));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let result = ServerConfig::load(Some(file.path()));
        assert!(matches!(result, Err(Error::Toml(_))));
    }
}
