//! Safe copy-and-rename helper:
//! - Copies to a temp file in the destination directory
//! - Carries the source permissions over to the copy
//! - Atomically renames temp -> dest, replacing any existing file
//!
//! A reader of `dest` sees either the old content or the complete new content,
//! and copying a file onto itself leaves it intact.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::{io_copy, util};

/// Copy `src` to `dest` through a temp file; returns the number of bytes copied.
/// The destination directory must already exist.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<u64> {
    let dest_dir = match dest.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(anyhow!("destination has no parent: {}", dest.display())),
    };

    let tmp_path = util::unique_temp_path(dest_dir);

    let bytes = io_copy::copy_streaming(src, &tmp_path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        io_error_with_help("copy to temporary file", &tmp_path)(e)
    })?;

    // Best-effort: fs::copy semantics keep the mode bits.
    if let Ok(meta) = fs::metadata(src) {
        let _ = fs::set_permissions(&tmp_path, meta.permissions());
    }

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        });
    }

    Ok(bytes)
}
