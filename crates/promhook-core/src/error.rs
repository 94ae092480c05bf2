//! Shared error type across promhook crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Payload shape violates the structural contract.
    InvalidPayload,
    /// Rejected by the payload validator.
    ValidationFailed,
    /// Configuration load or range failure.
    Config,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal error (lifecycle misuse, unexpected state).
    Internal,
}

impl ErrorCode {
    /// String representation used in responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidPayload => "INVALID_PAYLOAD",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PromHookError>;

/// Unified error type used by core and adapter.
#[derive(Debug, Error)]
pub enum PromHookError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PromHookError {
    /// Map internal error to a stable caller-facing code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            PromHookError::InvalidPayload(_) => ErrorCode::InvalidPayload,
            PromHookError::Validation(_) => ErrorCode::ValidationFailed,
            PromHookError::Config(_) => ErrorCode::Config,
            PromHookError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            PromHookError::Internal(_) => ErrorCode::Internal,
        }
    }
}
