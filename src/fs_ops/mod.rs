//! Filesystem operations: planning, validation and execution of a single
//! file copy or move.

mod atomic;
mod copy;
mod entry;
mod execute;
mod helpers;
mod io_copy;
pub mod normalize;
mod plan;
mod util;

pub use copy::safe_copy_and_rename;
pub use entry::{TransferResult, cp};
pub use helpers::io_error_with_help;
pub use normalize::{basename, dirname, normalize};
pub use plan::{Action, TransferPlan, plan_transfer};
