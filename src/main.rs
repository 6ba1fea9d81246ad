//! gitq binary entry point.

use std::process::ExitCode;

use gitq::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "GITQ_LOG";

fn main() -> ExitCode {
    let args = Cli::parse_args();
    init_logging(args.debug);

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr fmt subscriber.
///
/// `GITQ_LOG` wins when set and valid; otherwise `--debug` selects `debug`
/// and everything else gets `warn`.
fn init_logging(debug: bool) {
    let default = if debug { "gitq=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
