//! I/O error adapters.
//!
//! Enrich io::Error with the failing operation, the path and a platform-aware
//! hint, for use with `map_err` in anyhow code paths:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create folder", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    let hint = match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
            libc::ENOENT => Some("path not found; verify it exists"),
            libc::EEXIST => Some("already exists; remove the target or choose another name"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem; cannot write here"),
            libc::ENOTDIR => Some("a path component is a file, not a folder"),
            libc::EISDIR => Some("target is a folder"),
            libc::ENAMETOOLONG => Some("filename or path too long"),
            _ => None,
        },
        #[cfg(windows)]
        Some(code) => match code {
            5 => Some("access denied; check permissions"),
            17 => Some("not same device; cross-filesystem move"),
            32 => Some("sharing violation; file is in use"),
            2 | 3 => Some("path not found; verify it exists"),
            80 => Some("already exists; choose another name"),
            112 => Some("insufficient disk space"),
            _ => None,
        },
        #[cfg(not(any(unix, windows)))]
        Some(_) => None,
        None => match e.kind() {
            io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
            io::ErrorKind::NotFound => Some("path not found; verify it exists"),
            io::ErrorKind::AlreadyExists => Some("already exists; remove the target or choose another name"),
            _ => None,
        },
    };

    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
