//! Error types for itdesk operations.
//!
//! This module defines [`ItdeskError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ItdeskError` for domain errors the CLI reports distinctly
//! - Use `anyhow::Error` (via `ItdeskError::Other`) for unexpected errors
//! - Validation errors never leave a partially written slot behind

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for itdesk operations.
#[derive(Debug, Error)]
pub enum ItdeskError {
    /// Required fields were missing when submitting a record.
    #[error("Missing required fields for {entity}: {}", .missing.join(", "))]
    Validation {
        entity: &'static str,
        missing: Vec<String>,
    },

    /// A field was present but its value is not acceptable.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// No record with the given identifier exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A record with the same natural key already exists.
    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    /// A purchase request cannot move between the given states.
    #[error("Request {id} is {from}, cannot mark it {to}")]
    InvalidTransition {
        id: String,
        from: String,
        to: String,
    },

    /// A stored slot could not be decoded.
    #[error("Slot '{slot}' is corrupt: {message}")]
    StoreCorrupt { slot: String, message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration values are out of range.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ItdeskError {
    /// Whether this error was caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidInput { .. }
                | Self::NotFound { .. }
                | Self::Duplicate { .. }
                | Self::InvalidTransition { .. }
        )
    }
}

/// Result type alias for itdesk operations.
pub type Result<T> = std::result::Result<T, ItdeskError>;
