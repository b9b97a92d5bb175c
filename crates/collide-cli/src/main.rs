use clap::Parser;
use collide_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Fall back to stderr if the state dir is not writable.
    if cli.wants_stderr_logging() || logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run().await {
        eprintln!("collide error: {:#}", err);
        std::process::exit(1);
    }
}
