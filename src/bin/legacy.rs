//! Legacy positional-dialect entrypoint, kept for batch scripts written
//! against the original fixed argument order:
//! `<shape.csv> <tsection.dat> [<mask>] <count>`.
//!
//! Unlike the switch dialect, the shape count here is mandatory and must
//! be strictly positive.
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

    match cli::run_positional(&args, &mut reporter, &DryRun) {
        Ok(()) => ExitCode::SUCCESS,
        // Resolution failures are already on the diagnostic stream.
        Err(Error::Arguments(_)) => ExitCode::FAILURE,
        Err(e) => {
            reporter.error(&format!("Conversion failed: {e}"));
            ExitCode::FAILURE
        }
    }
}
