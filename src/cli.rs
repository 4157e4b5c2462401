//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Positionals are collected loosely so an extra one can be reported as
//!   "Extraneous parameter" rather than a generic clap error.
//! - --debug is a shorthand for --log-level debug.
//! - An unknown flag becomes `UsageError::InvalidFlag` so it is reported like
//!   every other usage error; help, version and bad values stay with clap.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{LogLevel, RunConfig, Settings};
use crate::errors::UsageError;

/// Copy or rename a file, optionally using package.json values in the target path.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "copy-file",
    author,
    version,
    about = "Copy or rename a file (optionally with package.json template variables)"
)]
pub struct Args {
    /// `<source> [target]`; target may contain {{pkg.field}} placeholders.
    #[arg(value_name = "PARAMS", value_hint = ValueHint::AnyPath)]
    pub params: Vec<String>,

    /// Change working folder before resolving the source and target.
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub cd: Option<String>,

    /// Treat the target as a folder; the source file name is kept.
    #[arg(long)]
    pub folder: bool,

    /// Free-form note (e.g. for package.json scripts); ignored.
    #[arg(long, value_name = "TEXT")]
    pub note: Option<String>,

    /// Do not print the report line.
    #[arg(long)]
    pub quiet: bool,

    /// Move (rename) instead of copying.
    #[arg(long = "move")]
    pub move_file: bool,

    /// Leave an existing target file untouched (the whole operation is skipped).
    #[arg(long)]
    pub no_overwrite: bool,

    /// Manifest used for {{pkg.*}} placeholders (default: package.json or $COPY_FILE_MANIFEST).
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn source(&self) -> Option<&str> {
        self.params.first().map(String::as_str).filter(|s| !s.is_empty())
    }

    pub fn target(&self) -> Option<&str> {
        self.params.get(1).map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Check positional parameters; first problem wins.
    pub fn validate(&self) -> Result<(), UsageError> {
        if let Some(extra) = self.params.get(2) {
            return Err(UsageError::ExtraneousParameter(extra.clone()));
        }
        if self.source().is_none() {
            return Err(UsageError::MissingSource);
        }
        if self.target().is_none() {
            return Err(if self.folder {
                UsageError::MissingTargetFolder
            } else {
                UsageError::MissingTargetFile
            });
        }
        Ok(())
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a RunConfig (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut RunConfig) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(m) = &self.manifest {
            cfg.manifest_path = m.clone();
        }
        if self.json {
            cfg.json = true;
        }
        if self.quiet {
            cfg.quiet = true;
        }
    }

    /// Transfer settings for an already resolved target path.
    pub fn settings(&self, target: String) -> Settings {
        let mut settings = Settings::default()
            .move_file(self.move_file)
            .overwrite(!self.no_overwrite);
        settings.cd = self.cd.clone().filter(|c| !c.is_empty());
        if self.folder {
            settings.target_folder = Some(target);
        } else {
            settings.target_file = Some(target);
        }
        settings
    }
}

/// Extract the offending flag from a clap "unknown argument" error.
pub fn invalid_flag(err: &clap::Error) -> Option<UsageError> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(flag) => Some(UsageError::InvalidFlag(flag.clone())),
        _ => None,
    }
}

/// Parse the process arguments. Unknown flags are returned as a usage error;
/// any other clap outcome prints its own message and exits.
pub fn parse() -> Result<Args, UsageError> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(e) => match invalid_flag(&e) {
            Some(usage) => Err(usage),
            None => e.exit(),
        },
    }
}
