//! Top-level transfer entry: plan, validate, execute.

use anyhow::Result;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use crate::config::Settings;

use super::execute::execute;
use super::plan::{TransferPlan, plan_transfer};

/// Outcome of a successful `cp` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferResult {
    /// Normalized source path
    pub origin: String,
    /// Normalized destination path
    pub dest: String,
    /// Elapsed milliseconds
    pub duration: u64,
    /// The operation was a move
    pub moved: bool,
    /// Nothing was done because the target existed and overwrite was off
    pub skipped: bool,
}

impl TransferResult {
    pub(super) fn from_plan(plan: &TransferPlan, started: Instant, skipped: bool) -> Self {
        Self {
            origin: plan.source.clone(),
            dest: plan.target.clone(),
            duration: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            moved: plan.is_move() && !skipped,
            skipped,
        }
    }
}

/// Copy (or move, per `settings.move_file`) a single file.
///
/// Validation failures are returned as [`crate::TransferError`] inside the
/// anyhow error (use `downcast_ref`); the filesystem is left untouched in that
/// case. I/O failures while executing carry operation/path context.
pub fn cp(source_file: &str, settings: &Settings) -> Result<TransferResult> {
    let started = Instant::now();
    debug!(source_file, ?settings, "cp");
    let plan = plan_transfer(source_file, settings)?;
    execute(&plan, started)
}
