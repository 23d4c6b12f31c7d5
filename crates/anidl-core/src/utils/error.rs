//! Error types for the utility layer.

use thiserror::Error;

/// Raised by utilities that reject part of their input domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilsError {
    /// An argument was outside the accepted domain (e.g. a blank number for padding).
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl UtilsError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        UtilsError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Reasons a [`UrlPolicy`](super::UrlPolicy) failed to build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlPolicyError {
    /// The supplied scheme was empty.
    #[error("scheme must not be empty")]
    EmptyScheme,
    /// The supplied scheme contained invalid characters.
    #[error("scheme '{scheme}' contains invalid characters")]
    InvalidScheme { scheme: String },
}
