//! Error types for natview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for natview operations.
pub type Result<T> = std::result::Result<T, NatviewError>;

/// Errors that can occur in natview.
#[derive(Debug, Error)]
pub enum NatviewError {
    /// Input could not be interpreted as the expected number.
    #[error("Invalid argument '{input}': {reason}")]
    InvalidArgument {
        /// The offending input text.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// No route is registered for the path.
    #[error("No route for path: {path}")]
    UnknownRoute {
        /// The requested path.
        path: String,
    },

    /// Two routes share a path.
    #[error("Duplicate route path: {path}")]
    DuplicateRoute {
        /// The repeated path.
        path: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NatviewError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidArgument {
            input: input.into(),
            reason,
        }
    }

    /// Create an UnknownRoute error.
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute { path: path.into() }
    }

    /// Create a DuplicateRoute error.
    pub fn duplicate_route(path: impl Into<String>) -> Self {
        Self::DuplicateRoute { path: path.into() }
    }
}
