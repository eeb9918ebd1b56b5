//! Error types for rs-postmeta.
//!
//! This module defines the error types returned by extraction operations.
//! Absence of an optional container (the tag list) is not an error and is
//! reported through the operation's return value instead.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into a document tree.
    #[error("HTML parsing failed: {0}")]
    ParseFailure(String),

    /// A required anchor element or field is absent.
    #[error("Required structure not found: {0}")]
    StructureNotFound(&'static str),

    /// An anchor was found but its content does not match the expected micro-format.
    #[error("Format mismatch: {0}")]
    FormatMismatch(String),

    /// Unexpected failure during traversal or while parsing a sub-format.
    #[error("Internal extraction error: {0}")]
    InternalError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
