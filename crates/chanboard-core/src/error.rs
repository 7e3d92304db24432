//! Error types for chanboard-core
//!
//! A pass is all-or-nothing: any of these errors fails the whole pass and no
//! partial view is produced. Arithmetic guards (zero limits) never surface here.

use thiserror::Error;

/// Core error type for chanboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Input Errors
    // ===================
    #[error("Channel source unavailable: {message}")]
    InputUnavailable {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    #[error("Malformed channel record at row {row}: field '{field}' {reason}")]
    MalformedRecord {
        row: usize,
        field: &'static str,
        reason: String,
    },

    // ===================
    // Query Errors
    // ===================
    #[error("Unknown channel filter '{value}' (expected all, available, unavailable, paid or normal)")]
    InvalidFilter { value: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    /// Wrap a store failure as an unavailable input
    pub fn unavailable(message: impl Into<String>, source: rusqlite::Error) -> Self {
        CoreError::InputUnavailable {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn malformed(row: usize, field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::MalformedRecord {
            row,
            field,
            reason: reason.into(),
        }
    }

    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, CoreError::InputUnavailable { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, CoreError::MalformedRecord { .. })
    }

    /// True when the failure comes from the caller's request rather than the pool data
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::InvalidFilter { .. })
    }
}
