//! Destination path templates.
//!
//! `{{expr}}` tokens are replaced with values looked up by dotted path in the
//! context `{ "pkg": <manifest> }`, so `{{pkg.version}}` reads the manifest's
//! `version` field. Only the braces are stripped; whitespace stays part of the
//! expression, so `{{ pkg.name }}` does not resolve. A lookup that misses (or
//! hits `null`) yields [`MISSING_FIELD`] instead of failing.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::OnceLock;

/// Substituted for placeholders that do not resolve to a value.
pub const MISSING_FIELD: &str = "MISSING-FIELD-ERROR";

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{[^{}]*\}\}").expect("placeholder regex is valid"))
}

/// True if `path` contains at least one `{{...}}` token.
pub fn has_placeholders(path: &str) -> bool {
    placeholder_re().is_match(path)
}

/// Replace every placeholder in `path` using `manifest` as `pkg`.
pub fn resolve_template(path: &str, manifest: &Value) -> String {
    placeholder_re()
        .replace_all(path, |caps: &Captures| {
            let expr = caps[0].replace(['{', '}'], "");
            lookup_expr(&expr, manifest)
                .and_then(render)
                .unwrap_or_else(|| MISSING_FIELD.to_string())
        })
        .into_owned()
}

/// Resolve a dotted expression; the first segment must be `pkg`.
fn lookup_expr<'a>(expr: &str, manifest: &'a Value) -> Option<&'a Value> {
    let mut segments = expr.split('.');
    match segments.next() {
        Some("pkg") => lookup(manifest, &segments.collect::<Vec<_>>()),
        _ => None,
    }
}

/// Walk `value` by key (objects) or index (arrays).
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let Some((head, rest)) = path.split_first() else {
        return Some(value);
    };
    let next = match value {
        Value::Object(map) => map.get(*head)?,
        Value::Array(items) => items.get(head.parse::<usize>().ok()?)?,
        _ => return None,
    };
    lookup(next, rest)
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest() -> Value {
        json!({
            "type": "module",
            "name": "copy-file-util",
            "version": "1.1.3",
            "private": false,
            "files": ["dist", "bin"],
            "repository": { "type": "git", "url": "https://example.org/copy-file-util" }
        })
    }

    #[test]
    fn substitutes_package_fields() {
        let out = resolve_template(
            "target/{{pkg.type}}/{{pkg.name}}-v{{pkg.version}}.html",
            &manifest(),
        );
        assert_eq!(out, "target/module/copy-file-util-v1.1.3.html");
    }

    #[test]
    fn nested_and_indexed_lookups() {
        let m = manifest();
        assert_eq!(resolve_template("{{pkg.repository.type}}", &m), "git");
        assert_eq!(resolve_template("{{pkg.files.1}}", &m), "bin");
        assert_eq!(resolve_template("{{pkg.private}}", &m), "false");
    }

    #[test]
    fn misses_yield_sentinel() {
        let m = manifest();
        assert_eq!(resolve_template("a/{{pkg.nope}}/b", &m), "a/MISSING-FIELD-ERROR/b");
        assert_eq!(resolve_template("{{name}}", &m), MISSING_FIELD);
        assert_eq!(resolve_template("{{pkg.files.9}}", &m), MISSING_FIELD);
    }

    #[test]
    fn whitespace_inside_braces_is_part_of_the_expression() {
        let m = manifest();
        assert_eq!(resolve_template("{{ pkg.name }}", &m), MISSING_FIELD);
        assert_eq!(resolve_template("v{{pkg.version }}", &m), "vMISSING-FIELD-ERROR");
    }

    #[test]
    fn literal_paths_are_untouched() {
        assert!(!has_placeholders("target/plain.html"));
        assert!(has_placeholders("target/{{pkg.name}}.html"));
        assert_eq!(resolve_template("target/{x}.html", &manifest()), "target/{x}.html");
    }
}
