//! Unified error types for all layers of the application.

use thiserror::Error;

/// Unified error type for the Roster dashboard.
///
/// Form validation failures are not represented here; they are reported
/// as [`crate::FieldErrors`] and never abort an operation.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A remote call failed: transport error, non-success status, or an
    /// undecodable body. Carries only the operation-specific message.
    #[error("{0}")]
    Fetch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "FETCH_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a fetch error.
    #[must_use]
    pub fn fetch<T: Into<String>>(message: T) -> Self {
        Self::Fetch(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}
