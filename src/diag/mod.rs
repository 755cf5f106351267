//! Diagnostic reporting: timestamped ERROR/WARNING/info lines written to an
//! explicit sink, so tests can capture output without intercepting a shared
//! stream.
use std::io::{self, Write};

use chrono::Local;

use crate::types::Severity;

/// Time prefix for every message line. Fixed and locale-independent so the
/// diagnostic stream is reproducible across environments.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Writes classified, wall-clock-stamped messages to a caller-supplied sink.
///
/// Sink write failures are swallowed; reporting never aborts resolution.
pub struct Reporter<W: Write> {
    sink: W,
}

impl Reporter<io::Stderr> {
    /// Reporter over the process diagnostic stream used by the binaries.
    pub fn stderr() -> Self {
        Reporter::new(io::stderr())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// ERROR line; the caller aborts resolution after emitting one.
    pub fn error(&mut self, message: &str) {
        self.tagged(Severity::Error, message);
    }

    /// WARNING line; the caller substitutes a documented default and continues.
    pub fn warning(&mut self, message: &str) {
        self.tagged(Severity::Warning, message);
    }

    /// Untagged informational line, still timestamped.
    pub fn info(&mut self, message: &str) {
        let _ = writeln!(self.sink, "{} {}", Self::timestamp(), message);
    }

    /// Raw line without a timestamp; used for usage blocks.
    pub fn raw(&mut self, line: &str) {
        let _ = writeln!(self.sink, "{line}");
    }

    fn tagged(&mut self, severity: Severity, message: &str) {
        let _ = writeln!(self.sink, "{} {}: {}", Self::timestamp(), severity, message);
    }

    /// Consumes the reporter, handing back the sink. Tests use this to
    /// inspect captured output.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn timestamp() -> impl std::fmt::Display {
        Local::now().format(TIME_FORMAT)
    }
}
