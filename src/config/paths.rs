//! Default path helpers.
//! Determines where the project manifest is read from.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the manifest location.
pub const MANIFEST_ENV: &str = "COPY_FILE_MANIFEST";

/// Manifest file name looked up in the working directory.
const MANIFEST_DEFAULT: &str = "package.json";

/// Manifest path: `$COPY_FILE_MANIFEST` if set and non-empty, else `package.json`
/// relative to the current working directory.
pub fn default_manifest_path() -> PathBuf {
    match env::var_os(MANIFEST_ENV) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from(MANIFEST_DEFAULT),
    }
}
