//! File-system boundary probes used during argument resolution.
use std::fs::File;
use std::path::Path;

/// Returns true only if `path` names an existing regular file that can
/// currently be opened for reading.
///
/// Never raises an error to its caller: missing files, directories,
/// permission denials and I/O failures all yield false. The probe handle
/// is scoped and released on every exit path, and repeated calls for the
/// same path have no side effects.
pub fn is_readable_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => File::open(path).is_ok(),
        _ => false,
    }
}
