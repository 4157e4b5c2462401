//! Application orchestrator.
//! Merges config, initializes logging, checks the positional parameters,
//! resolves target templates, runs the transfer and reports the outcome.

use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;

use copy_file_util::cli::Args;
use copy_file_util::config::load_manifest;
use copy_file_util::errors::tagged;
use copy_file_util::output as out;
use copy_file_util::{
    RunConfig, TransferError, TransferResult, UsageError, cp, has_placeholders, reporter,
    resolve_template,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> ExitCode {
    let mut cfg = RunConfig::default();
    args.apply_overrides(&mut cfg);

    if let Err(e) = init_tracing(&cfg.log_level, cfg.json) {
        out::print_warn(&format!("Failed to initialize logging: {e}"));
    }
    debug!(?args, ?cfg, "Starting copy-file");

    match transfer(&args, &cfg) {
        Ok(result) => {
            if !cfg.quiet {
                reporter(result);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_failure(&e);
            out::print_error(&tagged(format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn transfer(args: &Args, cfg: &RunConfig) -> Result<TransferResult> {
    args.validate()?;
    let (Some(source), Some(raw_target)) = (args.source(), args.target()) else {
        return Err(UsageError::MissingSource.into());
    };

    // Only read the manifest when the target actually uses it.
    let target = if has_placeholders(raw_target) {
        let manifest = load_manifest(&cfg.manifest_path)?;
        let resolved = resolve_template(raw_target, &manifest);
        debug!(template = raw_target, %resolved, "Resolved target template");
        resolved
    } else {
        raw_target.to_string()
    };

    cp(source, &args.settings(target))
}

/// Structured failure details; the user-facing line is printed separately.
fn log_failure(e: &anyhow::Error) {
    if let Some(te) = e.downcast_ref::<TransferError>() {
        debug!(code = te.code(), kind = te.kind(), "{te}");
    } else if let Some(ue) = e.downcast_ref::<UsageError>() {
        debug!(code = ue.code(), kind = "usage", "{ue}");
    } else {
        debug!(error = ?e, "Transfer failed");
    }
}
