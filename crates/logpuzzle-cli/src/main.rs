use logpuzzle_core::{config, logging};
use std::io;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    let stdout = io::stdout();
    match cli::run_with_args(std::env::args_os(), config::load_or_init, &mut stdout.lock()) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("logpuzzle error: {:#}", err);
            std::process::exit(1);
        }
    }
}
