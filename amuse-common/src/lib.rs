//! # Amuse Common Library
//!
//! Shared code for the Amuse now-playing service including:
//! - Error type and result alias
//! - Configuration loading (TOML file with compiled defaults)
//! - Human-readable durations and seekbar percent
//! - Wire number serialization compatible with the now-playing widget

pub mod config;
pub mod error;
pub mod human_time;
pub mod wire;

pub use config::{ProviderConfig, ServerConfig};
pub use error::{Error, Result};
