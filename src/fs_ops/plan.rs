//! Transfer planning.
//! Turns a source path plus `Settings` into a validated `TransferPlan` without
//! mutating the filesystem: normalize paths, derive the destination, then run
//! the validation rules in priority order (first failure wins).
//!
//! Notes:
//! - The destination folder is NOT created here. Creation is deferred to the
//!   executor so a rejected request never leaves empty folders behind.
//! - Only metadata lookups touch the filesystem.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::Settings;
use crate::errors::TransferError;

use super::normalize::{basename, dirname, normalize};

/// What the executor will do with a validated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Move,
    /// Overwrite disabled and the target already exists; leave everything as is.
    Skip,
}

/// Fully resolved, validated copy/move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    /// Normalized source file path
    pub source: String,
    /// Normalized destination file path (inside `target_folder`)
    pub target: String,
    /// Normalized destination folder
    pub target_folder: String,
    pub action: Action,
}

impl TransferPlan {
    /// True when the executor will rename rather than copy.
    pub fn is_move(&self) -> bool {
        self.action == Action::Move
    }
}

#[inline]
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Resolve and validate a transfer of `source_file` according to `settings`.
pub fn plan_transfer(source_file: &str, settings: &Settings) -> Result<TransferPlan, TransferError> {
    let cd = non_empty(settings.cd.as_deref());
    let target_file = non_empty(settings.target_file.as_deref());
    let target_folder = non_empty(settings.target_folder.as_deref());

    // 1) Normalize the source under the optional working folder.
    let start_folder = cd.map(|c| format!("{}/", normalize(c))).unwrap_or_default();
    let source = if source_file.is_empty() {
        String::new()
    } else {
        normalize(&format!("{start_folder}{source_file}"))
    };
    let source_meta = if source.is_empty() { None } else { fs::metadata(&source).ok() };
    let source_is_file = source_meta.as_ref().is_some_and(|m| m.is_file());

    // 2) Derive the destination; a folder target borrows the source's file name.
    let folder_part = match (target_file, target_folder) {
        (Some(file), _) => Some(dirname(file)),
        (None, Some(folder)) => Some(folder.to_string()),
        (None, None) => None,
    };
    let target_rel = match (target_file, target_folder) {
        (Some(file), _) => Some(file.to_string()),
        (None, Some(folder)) if source_is_file => Some(format!("{folder}/{}", basename(&source))),
        _ => None,
    };
    let resolved_folder = folder_part.map(|p| normalize(&format!("{start_folder}{p}")));
    let resolved_target = target_rel.map(|t| normalize(&format!("{start_folder}{t}")));

    // 3) Validate in priority order.
    if non_empty(settings.file_extension.as_deref()).is_some() {
        return Err(TransferError::FileExtensionUnsupported);
    }
    if source_file.is_empty() {
        return Err(TransferError::MissingSource);
    }
    if source_meta.is_none() {
        return Err(TransferError::SourceNotFound(source));
    }
    if !source_is_file {
        return Err(TransferError::SourceNotFile(source));
    }
    if target_file.is_none() && target_folder.is_none() {
        return Err(TransferError::MissingTarget);
    }
    if target_file.is_some() && target_folder.is_some() {
        return Err(TransferError::AmbiguousTarget);
    }
    let (Some(folder), Some(target)) = (resolved_folder, resolved_target) else {
        return Err(TransferError::MissingTarget);
    };
    if !folder_can_be_created(Path::new(&folder)) {
        return Err(TransferError::TargetFolderUnwritable(folder));
    }

    // 4) Choose the action; no-overwrite blocks the whole operation, moves included.
    // Only an existing regular file is protected; anything else fails on execution.
    let target_is_file = fs::metadata(&target).is_ok_and(|m| m.is_file());
    let action = if !settings.overwrite && target_is_file {
        Action::Skip
    } else if settings.move_file {
        Action::Move
    } else {
        Action::Copy
    };

    debug!(%source, %target, target_folder = %folder, ?action, "Planned transfer");
    Ok(TransferPlan {
        source,
        target,
        target_folder: folder,
        action,
    })
}

/// True if `folder` is a directory, or could be created because its nearest
/// existing ancestor is one. A relative path with no existing ancestor lands in
/// the working directory. Actual write access is checked by the executor once
/// the folder exists.
fn folder_can_be_created(folder: &Path) -> bool {
    let mut current = Some(folder);
    while let Some(p) = current {
        if p.as_os_str().is_empty() {
            return true;
        }
        if let Ok(meta) = fs::metadata(p) {
            return meta.is_dir();
        }
        current = p.parent();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn fixture() -> (assert_fs::TempDir, String) {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("source/mock.html").write_str("<p>mock</p>").unwrap();
        let cd = dir.path().to_string_lossy().replace('\\', "/");
        (dir, cd)
    }

    #[test]
    fn folder_target_reuses_source_name() {
        let (_dir, cd) = fixture();
        let settings = Settings::default().cd(&cd).target_folder("target/cd/");
        let plan = plan_transfer("source/mock.html", &settings).unwrap();
        assert_eq!(plan.source, format!("{}/source/mock.html", normalize(&cd)));
        assert_eq!(plan.target, format!("{}/target/cd/mock.html", normalize(&cd)));
        assert_eq!(plan.target_folder, format!("{}/target/cd", normalize(&cd)));
        assert_eq!(plan.action, Action::Copy);
    }

    #[test]
    fn file_target_uses_its_directory() {
        let (_dir, cd) = fixture();
        let settings = Settings::default()
            .cd(&cd)
            .target_file("target/cd-rename/mock2.html")
            .move_file(true);
        let plan = plan_transfer("source/mock.html", &settings).unwrap();
        assert!(plan.target.ends_with("/target/cd-rename/mock2.html"));
        assert!(plan.target_folder.ends_with("/target/cd-rename"));
        assert!(plan.is_move());
    }

    #[test]
    fn planning_creates_nothing() {
        let (dir, cd) = fixture();
        let settings = Settings::default().cd(&cd).target_folder("deep/new/folder");
        plan_transfer("source/mock.html", &settings).unwrap();
        assert!(!dir.path().join("deep").exists());
    }

    #[test]
    fn priority_order_is_respected() {
        let (_dir, cd) = fixture();
        // fileExtension outranks everything, even a missing source
        let s = Settings::default().file_extension(".txt");
        assert_eq!(plan_transfer("", &s), Err(TransferError::FileExtensionUnsupported));

        let s = Settings::default().cd(&cd);
        assert_eq!(plan_transfer("", &s), Err(TransferError::MissingSource));

        // a missing source outranks a missing target
        let err = plan_transfer("source/nope.html", &s).unwrap_err();
        assert!(matches!(err, TransferError::SourceNotFound(ref p) if p.ends_with("source/nope.html")));

        let err = plan_transfer("source", &s.clone().target_folder("t")).unwrap_err();
        assert!(matches!(err, TransferError::SourceNotFile(_)));

        assert_eq!(plan_transfer("source/mock.html", &s), Err(TransferError::MissingTarget));

        let both = s.clone().target_file("t/a.html").target_folder("t");
        assert_eq!(plan_transfer("source/mock.html", &both), Err(TransferError::AmbiguousTarget));
    }

    #[test]
    fn folder_under_a_file_is_unwritable() {
        let (_dir, cd) = fixture();
        let s = Settings::default().cd(&cd).target_folder("source/mock.html/sub");
        let err = plan_transfer("source/mock.html", &s).unwrap_err();
        assert!(matches!(err, TransferError::TargetFolderUnwritable(ref f) if f.ends_with("source/mock.html/sub")));
    }

    #[test]
    fn no_overwrite_with_existing_target_skips() {
        let (dir, cd) = fixture();
        dir.child("target/mock.html").write_str("old").unwrap();
        let s = Settings::default()
            .cd(&cd)
            .target_folder("target")
            .move_file(true)
            .overwrite(false);
        let plan = plan_transfer("source/mock.html", &s).unwrap();
        assert_eq!(plan.action, Action::Skip);
    }

    #[test]
    fn no_overwrite_does_not_skip_over_a_directory() {
        let (dir, cd) = fixture();
        dir.child("target/mock.html").create_dir_all().unwrap();
        let s = Settings::default().cd(&cd).target_folder("target").overwrite(false);
        let plan = plan_transfer("source/mock.html", &s).unwrap();
        assert_eq!(plan.action, Action::Copy);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_mode_bits_do_not_reject_at_planning() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, cd) = fixture();
        dir.child("ro").create_dir_all().unwrap();
        std::fs::set_permissions(dir.child("ro").path(), std::fs::Permissions::from_mode(0o555)).unwrap();
        let s = Settings::default().cd(&cd).target_folder("ro");
        let plan = plan_transfer("source/mock.html", &s);
        std::fs::set_permissions(dir.child("ro").path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(plan.is_ok(), "planning only checks the folder shape: {plan:?}");
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let (_dir, cd) = fixture();
        let s = Settings::default().cd(&cd).target_file("").target_folder("out");
        let plan = plan_transfer("source/mock.html", &s).unwrap();
        assert!(plan.target.ends_with("/out/mock.html"));
    }
}
