use std::process::ExitCode;

use copy_file_util::errors::tagged;
use copy_file_util::output::print_error;

mod app;
mod logging;

fn main() -> ExitCode {
    match copy_file_util::cli::parse() {
        Ok(args) => app::run(args),
        Err(e) => {
            print_error(&tagged(e));
            ExitCode::FAILURE
        }
    }
}
