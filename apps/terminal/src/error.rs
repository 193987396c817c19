//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  stdin line                  Rust Backend                               │
//! │  ──────────                  ────────────                               │
//! │                                                                         │
//! │  "new 4400 abc crown Crown"                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command::parse ── unknown verb? ─── UNKNOWN_COMMAND ──┐        │  │
//! │  │         │                                              │        │  │
//! │  │         ▼                                              ▼        │  │
//! │  │  Command fn ─── ValidationError ─── VALIDATION_ERROR ─ ApiError ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  error: price has invalid format: expected a decimal number like 12.50 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command errors are printed and the loop continues. Only [`AppError`]
//! (startup configuration, a broken terminal) ends the program.

use serde::Serialize;
use std::io;
use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::state::ConfigError;

/// Error returned from terminal commands.
///
/// ## Serialization
/// Scripted views reading `json` output see the same shape:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 150"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// First word of the line is not a command
    UnknownCommand,

    /// Command is missing an argument or has too many
    InvalidArguments,

    /// Something the user cannot fix
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown command error.
    pub fn unknown_command(verb: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("unknown command '{}', type 'help' for a list", verb),
        )
    }

    /// Creates a usage error for a command given the wrong arguments.
    pub fn usage(usage: &str) -> Self {
        ApiError::new(ErrorCode::InvalidArguments, format!("usage: {}", usage))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::InvalidSelectionRange { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Snapshot serialization failed: {}", err);
        ApiError::internal("could not serialize storefront snapshot")
    }
}

// =============================================================================
// Application Error
// =============================================================================

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_not_found_maps_to_not_found() {
        let err: ApiError = CoreError::ProductNotFound(150).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 150");
    }

    #[test]
    fn test_validation_maps_to_validation_error() {
        let err: ApiError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let wrapped: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "product id".to_string(),
        })
        .into();
        assert_eq!(wrapped.message, "product id must be positive");
    }

    #[test]
    fn test_api_error_serializes_screaming_code() {
        let json = serde_json::to_value(ApiError::unknown_command("dance")).unwrap();
        assert_eq!(json["code"], "UNKNOWN_COMMAND");
        assert!(json["message"].as_str().unwrap().contains("dance"));
    }
}
