#![doc = r#"
ShapeRep — command-line front end for a batch shape replicator.

This crate resolves the arguments of a tool that converts a shape described
in .csv into many MSTS/Open Rails shapes, replicated along track sections
from tsection.dat. Two independent command-line dialects are supported,
each by its own binary, and both produce a validated, typed parameter set
for the conversion engine:

- switch dialect (`shaperep`):
  `<shape.csv> <tsection.dat> [/m:<mask>] [/f:<ffedit>] [/c:<count>] [/g:<gauge>] [/r] [/b]`
- legacy positional dialect (`shaperep-legacy`):
  `<shape.csv> <tsection.dat> [<mask>] <count>`

The conversion engine itself (shape generation, .ref entries, compression
batch script) is an external collaborator reached through the
[`convert::ShapeConverter`] trait; the shipped binaries wire in
[`convert::DryRun`], which only logs the resolved configuration.

Severities
----------
Resolution distinguishes fatal ERRORs (unreadable input files, unknown
switches, a missing or non-positive mandatory count) from recoverable
WARNINGs (malformed optional switch values), which substitute documented
defaults and continue. Both are written, timestamped, to an explicit
diagnostic sink so embedders and tests can capture them.

Quick start: resolve a switch-dialect argument list
---------------------------------------------------
```rust,no_run
use shaperep::cli::resolve_flag_args;
use shaperep::diag::Reporter;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut reporter = Reporter::stderr();

    match resolve_flag_args(&args, &mut reporter) {
        Ok(params) => println!("would convert {} shapes", params.count),
        Err(_) => std::process::exit(1), // message and usage already reported
    }
}
```

Capturing diagnostics in tests or embedders
-------------------------------------------
```rust
use shaperep::cli::resolve_flag_args;
use shaperep::diag::Reporter;

let args = vec!["missing.csv".to_string()];
let mut reporter = Reporter::new(Vec::new());

assert!(resolve_flag_args(&args, &mut reporter).is_err());
let diagnostics = String::from_utf8(reporter.into_inner()).unwrap();
assert!(diagnostics.contains("ERROR: At least two arguments should be specified"));
```

Plugging in a conversion engine
-------------------------------
```rust,no_run
use shaperep::cli;
use shaperep::convert::ShapeConverter;
use shaperep::core::params::{ConversionParams, LegacyParams};
use shaperep::diag::Reporter;

struct Engine;

impl ShapeConverter for Engine {
    fn convert_shape(&self, params: &ConversionParams) -> shaperep::Result<()> {
        // replicate shapes, write .ref entries, emit the compression .bat
        Ok(())
    }

    fn convert_shape_legacy(&self, params: &LegacyParams) -> shaperep::Result<()> {
        Ok(())
    }
}

fn main() -> shaperep::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::run_flag(&args, &mut Reporter::stderr(), &Engine)
}
```

Useful modules
--------------
- [`cli`] — resolvers, fatal error types, usage text, orchestration.
- [`core`] — the resolved parameter types.
- [`convert`] — the converter seam and the dry-run stand-in.
- [`diag`] — the timestamped diagnostic reporter.
- [`io`] — the file readability probe.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod cli;
pub mod convert;
pub mod core;
pub mod diag;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::{ConversionParams, LegacyParams};
pub use error::{Error, Result};
pub use types::{Dialect, Severity};

pub use cli::{resolve_flag_args, resolve_positional_args, run_flag, run_positional};
pub use convert::{DryRun, ShapeConverter};
pub use diag::Reporter;
