//! Plan execution.
//! Creates the destination folder, then renames (move) or safely copies (copy).
//! A move that cannot rename across filesystems falls back to copy + remove.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::errors::TransferError;

use super::atomic::try_atomic_move;
use super::copy::safe_copy_and_rename;
use super::entry::TransferResult;
use super::helpers::io_error_with_help;
use super::plan::{Action, TransferPlan};
use super::util::{check_writable, is_cross_device};

/// Carry out a validated plan. `started` marks the beginning of the operation
/// and is used for the reported duration.
pub(super) fn execute(plan: &TransferPlan, started: Instant) -> Result<TransferResult> {
    let src = Path::new(&plan.source);
    let dest = Path::new(&plan.target);

    if plan.action == Action::Skip {
        info!(src = %plan.source, dest = %plan.target, "Target exists and overwrite is off; skipped");
        return Ok(TransferResult::from_plan(plan, started, true));
    }

    let folder = Path::new(&plan.target_folder);
    if let Err(e) = fs::create_dir_all(folder) {
        warn!(folder = %plan.target_folder, error = %e, "Cannot create target folder");
        return Err(TransferError::TargetFolderUnwritable(plan.target_folder.clone()).into());
    }
    if let Err(e) = check_writable(folder) {
        warn!(folder = %plan.target_folder, error = %e, "Target folder is not writable");
        return Err(TransferError::TargetFolderUnwritable(plan.target_folder.clone()).into());
    }

    match plan.action {
        Action::Move => move_file(src, dest)?,
        _ => {
            let bytes = safe_copy_and_rename(src, dest)?;
            info!(src = %plan.source, dest = %plan.target, bytes, "Copied file");
        }
    }

    Ok(TransferResult::from_plan(plan, started, false))
}

fn move_file(src: &Path, dest: &Path) -> Result<()> {
    match try_atomic_move(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "Rename crosses filesystems; using safe copy + remove");
            safe_copy_and_rename(src, dest)?;
            fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
            info!(src = %src.display(), dest = %dest.display(), "Moved file by copy");
            Ok(())
        }
        Err(e) => Err(io_error_with_help("rename file", src)(e)),
    }
}
