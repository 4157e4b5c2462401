//! Streaming copy into a fresh file.
//!
//! - Writes to a newly created destination file (O_EXCL semantics; never clobbers).
//! - File-to-file `io::copy` lets std use in-kernel copies where available
//!   (copy_file_range / sendfile on Linux).
//! - The destination is fsynced before returning.
//!
//! Snapshot semantics: the source is read once from start to EOF; bytes appended
//! concurrently are not included.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Copy `src` -> `dst` and fsync the destination. Returns the number of bytes written.
/// Callers are responsible for syncing the parent directory after the final rename.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut src_f = File::open(src)?;
    let mut dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;
    let bytes = io::copy(&mut src_f, &mut dst_f)?;
    dst_f.sync_all()?;
    Ok(bytes)
}
