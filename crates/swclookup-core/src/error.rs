//! Error types for the lookup pipeline.
//!
//! Every failure class is fatal and maps to its own process exit code so
//! that scripted callers can tell the classes apart.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("unable to read API key from '{path}': {source}")]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to read event from '{path}': {source}")]
    EventRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("event file '{path}' is not valid JSON: {source}")]
    EventParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid event timestamp '{value}': {reason}")]
    Timestamp { value: String, reason: String },

    #[error("unable to connect to the service at '{url}': {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("service returned status {status} from '{url}'")]
    Status { url: String, status: u16 },

    #[error("service returned non-JSON content '{content_type}' from '{url}'")]
    ContentType { url: String, content_type: String },

    #[error("unable to decode response body from '{url}': {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("unable to read config from '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file '{path}' is not valid TOML: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to render record as JSON: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl LookupError {
    /// The process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            LookupError::KeyFile { .. } => 1,
            LookupError::EventRead { .. } | LookupError::EventParse { .. } => 2,
            LookupError::Timestamp { .. } => 2,
            LookupError::Connect { .. } | LookupError::Client(_) => 3,
            LookupError::Status { .. } => 4,
            LookupError::ContentType { .. } => 5,
            LookupError::Body { .. } | LookupError::Render(_) => 6,
            LookupError::ConfigRead { .. } | LookupError::ConfigParse { .. } => 7,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
