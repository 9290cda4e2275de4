//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// No variant is fatal: every failure is local to one request and the caller
/// recovers by re-issuing it.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Network-level or server-side failure (connect error, 5xx).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request exceeded the fixed deadline supplied by the transport.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Session expired or missing; the caller may force re-authentication.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Rejected before dispatch, never sent to the network.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Maps an HTTP status code from the external API to an error variant.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Self::Unauthorized(message),
            404 => Self::NotFound(message),
            400..=499 => Self::Validation(message),
            _ => Self::Transport(message),
        }
    }

    /// Returns true for failures the caller should treat as a dead session.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Returns the error code for UI-facing error states.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }
}
