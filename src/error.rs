//! Error types for the result display formatter.

use thiserror::Error;

/// Result type alias for formatter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for formatter and session-helper operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Semantic type with no display representation yet.
    ///
    /// Raised when a cell is dispatched as a period or duration column.
    /// There is no safe fallback representation for these kinds, so the
    /// failure must surface to the caller instead of a wrong value.
    #[error("{kind} type is not supported yet")]
    UnsupportedSemanticType { kind: &'static str },

    /// A SQL statement issued by a transaction helper failed.
    #[error("Statement execution failed: {message}")]
    Execution { message: String },

    /// Type conversion error.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },
}

impl Error {
    /// Create an unsupported-semantic-type error.
    pub fn unsupported(kind: &'static str) -> Self {
        Self::UnsupportedSemanticType { kind }
    }

    /// Create a statement execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }
}
