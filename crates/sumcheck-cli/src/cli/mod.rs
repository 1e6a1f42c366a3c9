//! Command line for sumcheck.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use sumcheck_core::config::Config;
use sumcheck_core::{resolve, Algorithm, Error, Renderer, Session, Verdict};

/// Compute a file checksum interactively and compare it to an expected one.
#[derive(Debug, Parser)]
#[command(name = "sumcheck", version)]
#[command(about = "Compute a file checksum and compare it to an expected one", long_about = None)]
pub struct Cli {
    /// Hash algorithm: md5, sha1, sha224, sha384, sha256 or sha512 (any case). Defaults to sha256.
    #[arg(value_name = "ALGORITHM", conflicts_with = "algorithm_flag")]
    pub algorithm: Option<String>,

    /// Same as the positional ALGORITHM.
    #[arg(short = 'a', long = "algorithm", value_name = "ALGORITHM")]
    pub algorithm_flag: Option<String>,

    /// Extra arguments are accepted and ignored; only the first one counts.
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,

    /// Disable colored output (same as setting NO_COLOR).
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Algorithm name given on the command line, if any.
    pub fn requested_algorithm(&self) -> Option<&str> {
        self.algorithm
            .as_deref()
            .or(self.algorithm_flag.as_deref())
    }

    /// Run one session on the process stdin/stdout.
    pub fn run(&self, config: Config) -> Result<Verdict> {
        let mut renderer = Renderer::stdout(config.color);
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.run_with(config, &mut input, &mut renderer)
    }

    /// Resolve the algorithm (printing usage when none was given) and run the session.
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        mut config: Config,
        input: &mut R,
        renderer: &mut Renderer<W>,
    ) -> Result<Verdict> {
        config.algorithm = match self.requested_algorithm() {
            None => {
                renderer
                    .usage(&Algorithm::ALL)
                    .context("write usage")?;
                Algorithm::DEFAULT
            }
            Some(name) => resolve(name).map_err(unknown_algorithm)?,
        };
        tracing::debug!("using algorithm {}", config.algorithm);

        let verdict = Session::new(config).run(input, renderer)?;
        Ok(verdict)
    }
}

/// Print the error chain in the report style, or on `fallback` when the
/// report cannot be written (e.g. stdout closed).
pub fn report_failure<W: Write, E: Write>(
    renderer: &mut Renderer<W>,
    fallback: &mut E,
    err: &anyhow::Error,
) {
    let message = format!("{:#}", err);
    if renderer.error(&message).is_err() {
        let _ = writeln!(fallback, "sumcheck error: {}", message);
    }
}

fn unknown_algorithm(err: Error) -> anyhow::Error {
    let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
    anyhow!("{} (supported: {})", err, names.join(", "))
}
