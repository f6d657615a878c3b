//! Error types and result aliases for reqprov operations.
//!
//! An incomparable pair of dependency expressions is a normal verdict, not an
//! error. Errors here are either caller contract violations or configuration
//! problems.

use thiserror::Error;

use crate::types::Sense;

/// Unified error type for all reqprov operations
#[derive(Error, Debug)]
pub enum ReqProvError {
    // Contract violations
    #[error("Sense '{sense}' does not match version '{version}': a version requires a sense and vice versa")]
    SenseVersionMismatch { sense: Sense, version: String },

    #[error("Invalid comparison operator: '{token}'")]
    InvalidSenseToken { token: String },

    #[error("Invalid sense flags: {flags:#x}")]
    InvalidSenseFlags { flags: u32 },

    #[error("Unknown relation tag: {tag}")]
    UnknownRelationTag { tag: i32 },

    #[error("Unknown relation kind: '{name}'")]
    UnknownRelationKind { name: String },

    // Config errors
    #[error("Failed to parse comparator config: {message}")]
    ConfigParse { message: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for reqprov operations
pub type ReqProvResult<T> = Result<T, ReqProvError>;

impl ReqProvError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error indicates a bug in the caller rather than bad data
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ReqProvError::SenseVersionMismatch { .. }
                | ReqProvError::InvalidSenseFlags { .. }
                | ReqProvError::UnknownRelationTag { .. }
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ReqProvError::SenseVersionMismatch { .. } => {
                Some("Pass an empty version together with Sense::Any, or a version with a comparison")
            },
            ReqProvError::InvalidSenseToken { .. } => {
                Some("Use one of <, <=, =<, =, ==, >=, => or >")
            },
            ReqProvError::UnknownRelationKind { .. } => {
                Some("Use one of requires, provides, conflicts or obsoletes")
            },
            ReqProvError::ConfigParse { .. } | ReqProvError::ConfigValidation { .. } => {
                Some("Check the comparator config against the documented keys")
            },
            _ => None,
        }
    }
}
