use std::io;
use std::path::Path;

use copy_file_util::fs_ops::io_error_with_help;

#[test]
fn notfound_fallback_hint_includes_path() {
    let p = Path::new("/nonexistent/path/for/test");
    let f = io_error_with_help("open", p);
    let err = f(io::Error::from(io::ErrorKind::NotFound));
    let msg = format!("{}", err);
    assert!(msg.contains("open"));
    assert!(msg.contains(p.to_string_lossy().as_ref()));
    assert!(msg.contains("path not found"));
}

#[cfg(unix)]
#[test]
fn enospc_hint_present() {
    let p = Path::new("/tmp");
    let f = io_error_with_help("write", p);
    let err = f(io::Error::from_raw_os_error(libc::ENOSPC));
    let msg = format!("{}", err);
    assert!(msg.contains("insufficient space"), "msg was: {}", msg);
    assert!(msg.contains("os code"), "should include os code in message");
}

#[cfg(unix)]
#[test]
fn notdir_hint_present() {
    let p = Path::new("/tmp/file.txt/sub");
    let f = io_error_with_help("create folder", p);
    let msg = format!("{}", f(io::Error::from_raw_os_error(libc::ENOTDIR)));
    assert!(msg.contains("is a file, not a folder"), "msg was: {}", msg);
}

#[test]
fn unknown_kind_has_no_hint() {
    let p = Path::new("x");
    let f = io_error_with_help("op", p);
    let msg = format!("{}", f(io::Error::new(io::ErrorKind::Other, "boom")));
    assert_eq!(msg, "op 'x': boom");
}
