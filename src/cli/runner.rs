//! Orchestration: resolve a dialect's arguments, then hand the validated
//! parameter set to the converter seam.
use std::io::Write;

use tracing::debug;

use super::args::{resolve_flag_args, resolve_positional_args};
use crate::convert::ShapeConverter;
use crate::diag::Reporter;
use crate::error::Result;

/// Runs the switch-dialect front end: resolve, then convert.
///
/// Resolution failures are already on the diagnostic stream (message plus
/// usage block) when the error is returned; converter failures pass
/// through untouched for the caller to map to an exit status.
pub fn run_flag<W: Write, C: ShapeConverter>(
    args: &[String],
    reporter: &mut Reporter<W>,
    converter: &C,
) -> Result<()> {
    let params = resolve_flag_args(args, reporter)?;
    debug!(?params, "resolved switch-dialect configuration");
    converter.convert_shape(&params)
}

/// Runs the legacy positional front end.
pub fn run_positional<W: Write, C: ShapeConverter>(
    args: &[String],
    reporter: &mut Reporter<W>,
    converter: &C,
) -> Result<()> {
    let params = resolve_positional_args(args, reporter)?;
    debug!(?params, "resolved positional configuration");
    converter.convert_shape_legacy(&params)
}
