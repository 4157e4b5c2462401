//! One-line transfer report.
//!
//! `[HH:MM:SS] copy-file <origin> → <dest> (<N>ms[, move])`

use chrono::Local;
use owo_colors::OwoColorize;
use tracing::info;

use crate::fs_ops::TransferResult;
use crate::output as out;

/// Build the report line for `result`, with ANSI colors when `color` is set.
pub fn format_report(result: &TransferResult, color: bool) -> String {
    let stamp = format!("[{}]", Local::now().format("%H:%M:%S"));
    let info = if result.skipped {
        "(skipped, target exists)".to_string()
    } else if result.moved {
        format!("({}ms, move)", result.duration)
    } else {
        format!("({}ms)", result.duration)
    };

    if color {
        format!(
            "{} {} {} {} {} {}",
            stamp.dimmed(),
            "copy-file".bright_black(),
            result.origin.blue().bold(),
            "→".bright_black().bold(),
            result.dest.magenta(),
            info.white()
        )
    } else {
        format!(
            "{} copy-file {} → {} {}",
            stamp, result.origin, result.dest, info
        )
    }
}

/// Print the report line and log the result, then hand the result back unchanged.
pub fn reporter(result: TransferResult) -> TransferResult {
    out::print_user(&format_report(&result, out::is_tty()));
    info!(
        origin = %result.origin,
        dest = %result.dest,
        duration_ms = result.duration,
        moved = result.moved,
        skipped = result.skipped,
        "Transfer reported"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(moved: bool, skipped: bool) -> TransferResult {
        TransferResult {
            origin: "spec/fixtures/source/mock.html".into(),
            dest: "spec/fixtures/target/mock.html".into(),
            duration: 3,
            moved,
            skipped,
        }
    }

    #[test]
    fn plain_line_layout() {
        let line = format_report(&sample(false, false), false);
        assert!(line.starts_with('['));
        assert!(line.ends_with(
            "copy-file spec/fixtures/source/mock.html → spec/fixtures/target/mock.html (3ms)"
        ));
    }

    #[test]
    fn move_and_skip_markers() {
        assert!(format_report(&sample(true, false), false).ends_with("(3ms, move)"));
        assert!(format_report(&sample(false, true), false).ends_with("(skipped, target exists)"));
    }

    #[test]
    fn reporter_passes_result_through() {
        let r = sample(true, false);
        assert_eq!(reporter(r.clone()), r);
    }
}
