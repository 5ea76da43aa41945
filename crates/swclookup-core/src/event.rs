//! Loaders for the local inputs: the seed event and the API key.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LookupError, Result};

/// The seed event: an arbitrary string-keyed JSON object.
///
/// No field is required. The translation schemes look for `src_ip`,
/// `src_port`, `dst_ip`, `dst_port`, `proto`, and `timestamp`
/// (`YYYY-MM-DD HH:MM:SS`); anything absent is simply skipped.
pub type Event = Map<String, Value>;

/// Read and parse the event file.
pub fn load_event(path: &Path) -> Result<Event> {
    let contents = std::fs::read_to_string(path).map_err(|e| LookupError::EventRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let event: Event = serde_json::from_str(&contents).map_err(|e| LookupError::EventParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), fields = event.len(), "loaded event");
    Ok(event)
}

/// Read the API key: first line of the key file, whitespace stripped.
pub fn load_api_key(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|e| LookupError::KeyFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(contents.lines().next().unwrap_or("").trim().to_string())
}
