//! Core configuration types.
//! - Settings is the per-call option bag of a transfer, with documented defaults.
//! - RunConfig holds CLI runtime settings (logging, manifest location).
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Per-transfer events
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Options for a single copy/move.
///
/// Exactly one of `target_file` / `target_folder` must be set for the call to
/// validate. Empty strings are treated as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Working folder prefixed to the source and target paths
    pub cd: Option<String>,
    /// Explicit destination path including the file name
    pub target_file: Option<String>,
    /// Destination folder; the source's file name is reused
    pub target_folder: Option<String>,
    /// Reserved; any value is rejected
    pub file_extension: Option<String>,
    /// Rename instead of copy
    pub move_file: bool,
    /// Replace an existing destination file
    pub overwrite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cd: None,
            target_file: None,
            target_folder: None,
            file_extension: None,
            move_file: false,
            overwrite: true,
        }
    }
}

impl Settings {
    pub fn cd(mut self, cd: impl Into<String>) -> Self {
        self.cd = Some(cd.into());
        self
    }

    pub fn target_file(mut self, file: impl Into<String>) -> Self {
        self.target_file = Some(file.into());
        self
    }

    pub fn target_folder(mut self, folder: impl Into<String>) -> Self {
        self.target_folder = Some(folder.into());
        self
    }

    pub fn file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = Some(ext.into());
        self
    }

    pub fn move_file(mut self, on: bool) -> Self {
        self.move_file = on;
        self
    }

    pub fn overwrite(mut self, on: bool) -> Self {
        self.overwrite = on;
        self
    }
}

/// Runtime configuration of the `copy-file` binary.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Console verbosity of tracing output
    pub log_level: LogLevel,
    /// Emit logs as JSON
    pub json: bool,
    /// Suppress the one-line report
    pub quiet: bool,
    /// Where `{{pkg.*}}` values are read from
    pub manifest_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Normal,
            json: false,
            quiet: false,
            manifest_path: paths::default_manifest_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults_allow_overwrite() {
        let s = Settings::default();
        assert!(s.overwrite);
        assert!(!s.move_file);
        assert!(s.target_file.is_none() && s.target_folder.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let s = Settings::default()
            .cd("spec/fixtures")
            .target_folder("target/cd")
            .move_file(true)
            .overwrite(false);
        assert_eq!(s.cd.as_deref(), Some("spec/fixtures"));
        assert_eq!(s.target_folder.as_deref(), Some("target/cd"));
        assert!(s.move_file);
        assert!(!s.overwrite);
    }

    #[test]
    fn log_level_parse_and_display() {
        assert_eq!(LogLevel::parse("TRACE"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Normal));
        assert_eq!(LogLevel::parse("loud"), None);
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert!("bogus".parse::<LogLevel>().is_err());
    }
}
