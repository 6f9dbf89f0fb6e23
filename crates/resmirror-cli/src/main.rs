use resmirror_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; falls back to stderr.
    logging::init();

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("resmirror error: {:#}", err);
        std::process::exit(1);
    }
}
