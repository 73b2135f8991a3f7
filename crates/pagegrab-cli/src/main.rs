use pagegrab_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // A failed fetch is reported by the run itself and still exits 0.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("pagegrab error: {:#}", err);
        std::process::exit(1);
    }
}
