//! Error handling for the staff report.

use std::io;

/// Specialized error type for building and rendering employee reports
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Error writing report output
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error serializing a report
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// An employee record failed validation
    #[error("Invalid employee {name:?}: {reason}")]
    InvalidEmployee {
        /// Name of the offending record (may be empty)
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// Report configuration is inconsistent
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ReportError {
    /// Create an invalid-employee error
    pub fn invalid_employee(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
