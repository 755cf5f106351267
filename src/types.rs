//! Shared types and enums used across the front end.
//! Includes the command-line `Dialect` and the diagnostic `Severity`.
use serde::{Deserialize, Serialize};

/// Which command-line grammar a front end speaks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Dialect {
    /// Two fixed file paths followed by `/m` `/f` `/c` `/g` `/r` `/b` switches.
    Flag,
    /// Fixed-order arguments with a mandatory trailing shape count.
    Positional,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Flag => write!(f, "flag"),
            Dialect::Positional => write!(f, "positional"),
        }
    }
}

/// Classification of a diagnostic message. An ERROR aborts resolution;
/// a WARNING substitutes a documented default and continues.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}
