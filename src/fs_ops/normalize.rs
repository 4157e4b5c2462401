//! Lexical path normalization on plain strings.
//!
//! Paths are kept as `/`-separated strings so results are identical on every
//! platform: backslashes become `/`, `.` segments and duplicate separators are
//! dropped, `..` is resolved lexically and trailing separators are stripped.
//! The filesystem is never consulted (symlinks are not resolved).

/// Normalize `path`. Empty input stays empty; a relative path that collapses
/// to nothing becomes `"."`; the root stays `"/"`.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let unified = path.replace('\\', "/");
    let (prefix, rest) = split_root(&unified);

    let mut out: Vec<&str> = Vec::new();
    for seg in rest.split('/') {
        match seg {
            "" | "." => {}
            ".." => match out.last() {
                Some(last) if *last != ".." => {
                    out.pop();
                }
                // Cannot climb above a root.
                _ if !prefix.is_empty() => {}
                _ => out.push(".."),
            },
            _ => out.push(seg),
        }
    }

    let joined = out.join("/");
    match (prefix.is_empty(), joined.is_empty()) {
        (true, true) => ".".to_string(),
        (false, true) => prefix.trim_end_matches('/').to_string() + "/",
        (_, false) => format!("{prefix}{joined}"),
    }
}

/// Split an absolute root (`/` or a drive like `C:/`) from the rest.
fn split_root(p: &str) -> (&str, &str) {
    let b = p.as_bytes();
    if b.first() == Some(&b'/') {
        return ("/", &p[1..]);
    }
    if b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && b[2] == b'/' {
        return (&p[..3], &p[3..]);
    }
    ("", p)
}

/// Directory part of `path` (`"."` when there is none).
pub fn dirname(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let trimmed = unified.trim_end_matches('/');
    if trimmed.is_empty() {
        return if unified.is_empty() { ".".into() } else { "/".into() };
    }
    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(idx) => {
            let head = trimmed[..idx].trim_end_matches('/');
            if head.is_empty() { "/".to_string() } else { head.to_string() }
        }
    }
}

/// Final segment of `path`, ignoring trailing separators.
pub fn basename(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let trimmed = unified.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}
