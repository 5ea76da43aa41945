//! TOML configuration for the lookup tool.
//!
//! The config file is optional; every field has a default so a bare working
//! directory with `swc_api_key.txt` and `event.json` works without one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

/// Top-level swclookup configuration, loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwcConfig {
    /// Session-data snapshot endpoint.
    #[serde(default = "default_session_url")]
    pub session_url: String,

    /// Alert endpoint.
    #[serde(default = "default_alert_url")]
    pub alert_url: String,

    /// File holding the API key on its first line.
    #[serde(default = "default_api_key_path")]
    pub api_key_path: PathBuf,

    /// JSON file holding the seed event.
    #[serde(default = "default_event_path")]
    pub event_path: PathBuf,
}

fn default_session_url() -> String {
    "https://cisco-maclemon.obsrvbl.com/api/v3/snapshots/session-data/".to_string()
}

fn default_alert_url() -> String {
    "https://cisco-maclemon.obsrvbl.com/api/v3/alerts/alert/".to_string()
}

fn default_api_key_path() -> PathBuf {
    PathBuf::from("swc_api_key.txt")
}

fn default_event_path() -> PathBuf {
    PathBuf::from("event.json")
}

impl Default for SwcConfig {
    fn default() -> Self {
        Self {
            session_url: default_session_url(),
            alert_url: default_alert_url(),
            api_key_path: default_api_key_path(),
            event_path: default_event_path(),
        }
    }
}

impl SwcConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// If the file does not exist, returns the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| LookupError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SwcConfig =
            toml::from_str(&contents).map_err(|e| LookupError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
