use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
pub fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn is_tty_stderr() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_warn(msg: &str) {
    if is_tty_stderr() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

/// Print an error line as-is (already tagged by the caller), red on a TTY.
pub fn print_error(msg: &str) {
    if is_tty_stderr() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Used for the transfer report,
/// which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
