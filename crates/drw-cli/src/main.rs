use drw_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging under the XDG state dir when possible, stderr otherwise.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("drw error: {:#}", err);
        std::process::exit(1);
    }
}
