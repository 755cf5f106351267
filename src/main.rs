//! ShapeRep CLI entrypoint (switch dialect).
//!
//! Thin wrapper over the `cli` module: resolve arguments, hand the
//! validated configuration to the converter seam, and exit with an
//! appropriate status. For programmatic use, prefer the library API
//! (`shaperep::cli`).
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use shaperep::cli;
use shaperep::convert::DryRun;
use shaperep::diag::Reporter;
use shaperep::error::Error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut reporter = Reporter::stderr();

    match cli::run_flag(&args, &mut reporter, &DryRun) {
        Ok(()) => ExitCode::SUCCESS,
        // Resolution failures are already on the diagnostic stream.
        Err(Error::Arguments(_)) => ExitCode::FAILURE,
        Err(e) => {
            reporter.error(&format!("Conversion failed: {e}"));
            ExitCode::FAILURE
        }
    }
}
