use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fully resolved parameter set produced by the switch-style command line,
/// suitable for config files and presets.
///
/// Built once per invocation and immutable afterwards; the converter seam
/// receives it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionParams {
    /// Source shape description (.csv).
    pub input_shape: PathBuf,
    /// Track-section database (tsection.dat).
    pub track_section: PathBuf,
    /// Output shape name filter (`*`/`?` wildcards); empty matches all.
    pub mask: String,
    /// ffeditc_unicode.exe location; `None` skips the compression step.
    pub ffedit_location: Option<PathBuf>,
    /// Maximum number of generated shapes; 0 means unlimited.
    pub count: u32,
    /// Track gauge filter; 0.0 converts all gauges.
    pub gauge: f32,
    /// Exclude road-type shapes, keeping track shapes only.
    pub skip_roads: bool,
    /// Restrict shape visibility with a bounding box in the .sd file.
    pub set_bounding_box: bool,
}

impl ConversionParams {
    /// Documented defaults for everything except the two mandatory files.
    pub fn new(input_shape: PathBuf, track_section: PathBuf) -> Self {
        Self {
            input_shape,
            track_section,
            mask: String::new(),
            ffedit_location: None,
            count: 0,
            gauge: 0.0,
            skip_roads: true,
            set_bounding_box: true,
        }
    }
}

/// Reduced parameter set of the legacy positional command line. The
/// switch-only fields (ffedit location, gauge, road and bounding-box
/// toggles) are structurally absent from this dialect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyParams {
    /// Source shape description (.csv).
    pub input_shape: PathBuf,
    /// Track-section database (tsection.dat).
    pub track_section: PathBuf,
    /// Output shape name filter; empty matches all.
    pub mask: String,
    /// Number of shapes to create; always strictly positive.
    pub count: u32,
}
