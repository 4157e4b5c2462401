//! Project manifest support.
//! - Loads `package.json` (or the configured manifest) as a generic JSON tree.
//! - Only the template boundary consumes it; transfers never do.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse the manifest at `path`. The top level must be a JSON object.
pub fn load_manifest(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read manifest '{}'", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("parse manifest '{}' as JSON", path.display()))?;
    if !value.is_object() {
        bail!("manifest '{}' is not a JSON object", path.display());
    }
    debug!(path = %path.display(), "Loaded manifest");
    Ok(value)
}
