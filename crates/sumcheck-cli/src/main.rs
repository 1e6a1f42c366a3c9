use std::process::ExitCode;

use clap::Parser;
use sumcheck_core::config::Config;
use sumcheck_core::{logging, Renderer};

mod cli;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible; a failure here is not fatal.
    if let Err(err) = logging::init_logging() {
        eprintln!("sumcheck: {:#}", err);
    }

    let cli = Cli::parse();
    let config = Config::from_env(cli.no_color);

    match cli.run(config.clone()) {
        Ok(verdict) => {
            tracing::debug!(?verdict, "session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("session failed: {:?}", err);
            cli::report_failure(
                &mut Renderer::stdout(config.color),
                &mut std::io::stderr(),
                &err,
            );
            ExitCode::FAILURE
        }
    }
}
