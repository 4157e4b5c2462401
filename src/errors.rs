//! Typed error definitions for copy-file.
//! Provides the validation failure modes of a transfer and the CLI usage errors,
//! with stable codes and kinds for structured logs and tests.

use thiserror::Error;

/// Tag prepended to every user-facing error message by the CLI.
pub const ERROR_TAG: &str = "[copy-file-util]";

/// Validation failures of a single copy/move, in priority order.
/// Only the first matching rule is ever reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Option \"fileExtension\" not yet implemented.")]
    FileExtensionUnsupported,

    #[error("Must specify the source file.")]
    MissingSource,

    #[error("Source file does not exist: {0}")]
    SourceNotFound(String),

    #[error("Source is not a file: {0}")]
    SourceNotFile(String),

    #[error("Must specify a target file or folder.")]
    MissingTarget,

    #[error("Target cannot be both a file and a folder.")]
    AmbiguousTarget,

    #[error("Target folder cannot be written to: {0}")]
    TargetFolderUnwritable(String),
}

impl TransferError {
    /// Stable numeric code (useful for logs/metrics).
    pub fn code(&self) -> u16 {
        match self {
            TransferError::FileExtensionUnsupported => 1,
            TransferError::MissingSource => 2,
            TransferError::SourceNotFound(_) => 3,
            TransferError::SourceNotFile(_) => 4,
            TransferError::MissingTarget => 5,
            TransferError::AmbiguousTarget => 6,
            TransferError::TargetFolderUnwritable(_) => 7,
        }
    }

    /// Short snake_case tag used as the `kind` field in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TransferError::FileExtensionUnsupported => "file_extension_unsupported",
            TransferError::MissingSource => "missing_source",
            TransferError::SourceNotFound(_) => "source_not_found",
            TransferError::SourceNotFile(_) => "source_not_file",
            TransferError::MissingTarget => "missing_target",
            TransferError::AmbiguousTarget => "ambiguous_target",
            TransferError::TargetFolderUnwritable(_) => "target_folder_unwritable",
        }
    }
}

/// Command-line parameter errors detected before any transfer is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Extraneous parameter: {0}")]
    ExtraneousParameter(String),

    #[error("Missing source file.")]
    MissingSource,

    #[error("Missing target folder.")]
    MissingTargetFolder,

    #[error("Missing target file.")]
    MissingTargetFile,

    #[error("Invalid flag: {0}")]
    InvalidFlag(String),
}

impl UsageError {
    pub fn code(&self) -> u16 {
        match self {
            UsageError::ExtraneousParameter(_) => 20,
            UsageError::MissingSource => 21,
            UsageError::MissingTargetFolder => 22,
            UsageError::MissingTargetFile => 23,
            UsageError::InvalidFlag(_) => 24,
        }
    }
}

/// Format an error message the way the CLI surfaces it.
pub fn tagged(msg: impl std::fmt::Display) -> String {
    format!("{ERROR_TAG} {msg}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_catalog() {
        assert_eq!(
            TransferError::MissingSource.to_string(),
            "Must specify the source file."
        );
        assert_eq!(
            TransferError::SourceNotFound("a/b.txt".into()).to_string(),
            "Source file does not exist: a/b.txt"
        );
        assert_eq!(
            TransferError::FileExtensionUnsupported.to_string(),
            "Option \"fileExtension\" not yet implemented."
        );
    }

    #[test]
    fn invalid_flag_names_the_flag() {
        let err = UsageError::InvalidFlag("--bogus".into());
        assert_eq!(tagged(&err), "[copy-file-util] Invalid flag: --bogus");
        assert_eq!(err.code(), 24);
    }

    #[test]
    fn tagged_prefixes_message() {
        let msg = tagged(TransferError::MissingTarget);
        assert_eq!(msg, "[copy-file-util] Must specify a target file or folder.");
    }

    #[test]
    fn codes_are_distinct() {
        let all = [
            TransferError::FileExtensionUnsupported,
            TransferError::MissingSource,
            TransferError::SourceNotFound(String::new()),
            TransferError::SourceNotFile(String::new()),
            TransferError::MissingTarget,
            TransferError::AmbiguousTarget,
            TransferError::TargetFolderUnwritable(String::new()),
        ];
        let mut codes: Vec<u16> = all.iter().map(TransferError::code).collect();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
