//! Command Line Interface (CLI) layer for the shape-replication front end.
//!
//! This module defines argument resolution (`args`), fatal error types
//! (`errors`), usage text (`help`), and the orchestration logic (`runner`)
//! for the two supported dialects. It wires user-provided arguments to the
//! converter seam exposed via `crate::convert`.
//!
//! If you are embedding the front end into another application, prefer the
//! resolver functions re-exported here over spawning the binaries.
pub mod args;
pub mod errors;
pub mod help;
pub mod runner;

pub use args::{resolve_flag_args, resolve_positional_args};
pub use errors::AppError;
pub use runner::{run_flag, run_positional};
