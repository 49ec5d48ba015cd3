//! Unified error handling for bangcmd.
//!
//! Handlers return `anyhow::Result`, so any error type works. [`HandlerError`]
//! covers the failures most commands share and gives them stable metric
//! labels. Whatever the error, the end user only ever sees the configured
//! generic error reply.

use thiserror::Error;

pub use crate::config::{ConfigError, ValidationError};

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Common errors raised by command handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error("invalid value for {key}: {value}")]
    InvalidArgument { key: String, value: String },

    #[error("handler panicked: {0}")]
    Panicked(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArgument(_) => "missing_argument",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::Panicked(_) => "panic",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Metric label for an arbitrary handler error.
pub fn error_code(error: &anyhow::Error) -> &'static str {
    error
        .downcast_ref::<HandlerError>()
        .map_or("error", HandlerError::error_code)
}
