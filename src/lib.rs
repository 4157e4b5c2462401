//! Core library for `copy-file`.
//!
//! Copies or moves one file to a target file or folder. The transfer is
//! planned and validated as a pure value first (`fs_ops::plan_transfer`) and
//! only then executed, so a rejected request never touches the filesystem.
//!
//! ```no_run
//! use copy_file_util::{Settings, cp, reporter};
//!
//! let settings = Settings::default().cd("spec/fixtures").target_folder("target/cd");
//! let result = cp("source/mock.html", &settings)?;
//! reporter(result);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod report;
pub mod template;

pub use config::{LogLevel, RunConfig, Settings};
pub use errors::{TransferError, UsageError};
pub use fs_ops::{TransferResult, cp};
pub use report::reporter;
pub use template::{has_placeholders, resolve_template};
