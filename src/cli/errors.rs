use thiserror::Error;

/// Fatal argument-resolution errors.
///
/// The `Display` strings double as the ERROR message text on the diagnostic
/// stream; resolvers report the message, emit the usage block, and return
/// the variant. Recoverable conditions are warnings, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("At least two arguments should be specified")]
    MissingArguments,

    #[error("Could not open initial shape file")]
    UnreadableShapeFile,

    #[error("Could not open tsection.dat file")]
    UnreadableTrackSection,

    #[error("Unknown argument provided")]
    UnknownArgument { arg: String },

    #[error("Shape quantity is not a positive integer")]
    InvalidShapeCount { value: String },
}
