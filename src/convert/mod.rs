//! Seam between argument resolution and the batch conversion pipeline.
//!
//! The conversion engine itself (shape replication along track sections,
//! `.ref` entries, the compression batch script) lives outside this crate.
//! The front end's only obligation is to hand it a validated parameter set;
//! it does not inspect the engine's outcome beyond propagating errors.
//! Implement [`ShapeConverter`] to plug a real engine into the binaries.
use tracing::debug;

use crate::core::params::{ConversionParams, LegacyParams};
use crate::error::Result;

pub trait ShapeConverter {
    /// Convert with the full switch-dialect parameter set.
    fn convert_shape(&self, params: &ConversionParams) -> Result<()>;

    /// Convert with the reduced legacy parameter set.
    fn convert_shape_legacy(&self, params: &LegacyParams) -> Result<()>;
}

/// Stand-in converter used by the shipped binaries: logs the resolved
/// configuration at debug level and succeeds without generating anything.
pub struct DryRun;

impl ShapeConverter for DryRun {
    fn convert_shape(&self, params: &ConversionParams) -> Result<()> {
        let rendered = serde_json::to_string(params)?;
        debug!(params = %rendered, "dry run, no shapes generated");
        Ok(())
    }

    fn convert_shape_legacy(&self, params: &LegacyParams) -> Result<()> {
        let rendered = serde_json::to_string(params)?;
        debug!(params = %rendered, "dry run, no shapes generated");
        Ok(())
    }
}
