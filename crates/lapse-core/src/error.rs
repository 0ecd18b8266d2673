//! Shared error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `LapseError` via `From` impls, or keep them separate and wrap `LapseError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// The top-level error type for `lapse-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LapseError {
    /// A caller-supplied parameter is out of range.  `name` identifies the
    /// offending parameter so the CLI can fail fast with a useful message.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LapseError {
    /// Shorthand constructor for the common validation case.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        LapseError::InvalidArgument { name, reason: reason.into() }
    }
}

/// Shorthand result type for all `lapse-*` crates.
pub type LapseResult<T> = Result<T, LapseError>;
