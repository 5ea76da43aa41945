//! Core library for the swclookup investigative CLI.
//!
//! This crate provides:
//! - TOML configuration with working-directory defaults
//! - Loaders for the seed event and the API key file
//! - Translation schemes that map event fields and derived time windows
//!   into query parameters
//! - An authenticated HTTP query client for the SWC REST endpoints
//! - Session and alert presenters

pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod params;
pub mod types;

// Re-export key types at crate root for convenience.
pub use client::SwcClient;
pub use config::SwcConfig;
pub use error::{LookupError, Result};
pub use event::Event;
pub use params::{ParamSource, TranslationScheme};
pub use types::{Alert, Session};
