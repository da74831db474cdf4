mod logging;
mod pipeline;
mod sshconfig;
mod store;

use clap::Parser;
use std::process::ExitCode;

const VERSION: &str = concat!(
    env!("SSHCONFIG_VERSION"),
    " ",
    env!("SSHCONFIG_BUILD_HASH")
);

/// Rewrites the hosts CSV in canonical order and generates ~/.ssh/config from it.
#[derive(Parser)]
#[command(name = "sshconfig", version = VERSION)]
struct Arguments {}

fn main() -> ExitCode {
    Arguments::parse();
    logging::init();

    match sshconfig::run() {
        Ok(summary) => {
            tracing::debug!(read = summary.read, kept = summary.kept, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
