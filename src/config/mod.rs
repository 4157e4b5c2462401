//! Config module.
//! Provides the transfer settings, runtime configuration, default paths and
//! manifest loading.

pub mod manifest;
pub mod paths;
pub mod types;

pub use manifest::load_manifest;
pub use paths::{MANIFEST_ENV, default_manifest_path};
pub use types::{LogLevel, RunConfig, Settings};
