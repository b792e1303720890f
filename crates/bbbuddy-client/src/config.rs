//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/bbbuddy/config.toml` by default:
//!
//! ```toml
//! endpoint = "http://localhost:8080/uh"
//! timeout = 10
//!
//! [server]
//! url = "https://bbb.example.com/bigbluebutton/api/"
//! secret = "env::BBB_SECRET"
//! ```
//!
//! The `secret` value supports secret references (see [`crate::secret`]).
//! CLI flags and environment variables override anything read from the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Configuration for the bbbuddy client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Bridge endpoint URL.
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    pub timeout: u64,

    /// Upstream server credentials forwarded to the bridge.
    pub server: ServerSettings,
}

/// Upstream BigBlueButton server settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// API URL of the upstream server.
    pub url: Option<String>,

    /// Shared secret, possibly a secret reference.
    pub secret: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: 10,
            server: ServerSettings::default(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file is not an error; defaults are returned.
    pub fn load() -> ApiResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ApiResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            ApiError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bbbuddy")
            .join("config.toml")
    }
}
