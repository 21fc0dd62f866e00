use thiserror::Error;

/// Failures when turning user-facing text or raw integer codes into typed values.
///
/// The descriptor itself never produces these; they come from the parsing helpers
/// that hosts use to fill a descriptor in.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid color `{0}`, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("unknown notification style `{0}`")]
    UnknownStyleName(String),

    #[error("unknown notification style code {0}")]
    UnknownStyle(i32),

    #[error("unknown group alert behaviour `{0}`")]
    UnknownGroupAlertName(String),

    #[error("unknown group alert behaviour code {0}")]
    UnknownGroupAlert(i32),

    #[error("invalid interval `{input}`: {reason}")]
    InvalidInterval { input: String, reason: String },
}
