//! Usage text for both command-line dialects.
//!
//! Stateless: no parsing or validation lives here. The block is written to
//! the diagnostic sink after every fatal resolution error to explain the
//! resolver's contract to the user.
use std::io::Write;

use crate::diag::Reporter;
use crate::types::Dialect;

/// Writes the fixed usage block for `dialect` to the diagnostic sink.
pub fn print_usage<W: Write>(dialect: Dialect, reporter: &mut Reporter<W>) {
    reporter.raw("");
    reporter.raw(
        "This app converts shape described in .csv into many MSTS/OR shapes, \
         replicated along track sections from tsection.dat",
    );
    reporter.raw("");

    match dialect {
        Dialect::Flag => flag_usage(reporter),
        Dialect::Positional => positional_usage(reporter),
    }

    reporter.raw("");
    reporter.raw("After conversion .ref entries are created.");
    reporter.raw(
        "After conversion a .bat to compress shapes later with ffeditc_unicode.exe is also created.",
    );
    reporter.raw("");
}

fn flag_usage<W: Write>(reporter: &mut Reporter<W>) {
    reporter.raw(
        "Usage: <input shape.csv> <tsection.dat> [/m:<mask>] [/f:<ffedit>] [/c:<count>] [/g:<gauge>] [/r] [/b]",
    );
    reporter.raw("");
    reporter.raw("1. Path and filename of .csv with the description of shape structure to create.");
    reporter.raw("2. Path and filename of tsection.dat, i.e. \"C:\\Train\\Global\\tsection.dat\".");
    reporter.raw("Paths may be omitted when files are in the current folder.");
    reporter.raw(
        "/m: Create only shapes corresponding to the mask. * and ? symbols may be used, eg. /m:\"A?t*.s\"",
    );
    reporter.raw(
        "/f: Full path of ffeditc_unicode.exe if you want to compress created shapes immediately",
    );
    reporter.raw("/c: Limit the number of created shapes, eg. /c:20");
    reporter.raw("/g: Convert only shapes with given track gauge. Use . as delimiter, eg. /g:1.5");
    reporter.raw(
        "/r  Don't skip road shapes. Otherwise track shapes processed only. No value needed, eg. just /r",
    );
    reporter.raw(
        "/b  Limit shape visibility angles by setting bounding box in .sd. No value needed, eg. just /b",
    );
}

fn positional_usage<W: Write>(reporter: &mut Reporter<W>) {
    reporter.raw(
        "Usage: <input shape.csv> <tsection.dat> [output shape file mask] <limit shapes count>",
    );
    reporter.raw("");
    reporter.raw("1. Path and filename of .csv with the description of shape structure to create.");
    reporter.raw("2. Path and filename of tsection.dat, i.e. \"C:\\Train\\Global\\tsection.dat\".");
    reporter.raw("Paths may be omitted when files are in the current folder.");
    reporter.raw(
        "3. Create only shapes corresponding to the mask. * and ? symbols may be used, i.e. A?t*.s",
    );
    reporter.raw("4. Limit the number of created shapes. Required; must be a positive integer.");
}
