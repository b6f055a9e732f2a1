//! Error types for pagelinks
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Suppressed output (too few records to paginate) is not an error; it is an
//! empty string.

use thiserror::Error;

/// The main error type for pagelinks
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Invalid Configuration
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Unknown template role: {role}")]
    UnknownTemplateRole { role: String },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid value error for a named setting
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an error for a setting that must be a positive integer
    pub fn not_positive(field: impl Into<String>) -> Self {
        Self::invalid_value(field, "must be an integer greater than 0")
    }

    /// Create an unknown template role error
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownTemplateRole { role: role.into() }
    }

    /// Check if this error reports invalid caller-supplied configuration
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::InvalidConfigValue { .. } | Error::UnknownTemplateRole { .. }
        )
    }
}

/// Result type alias for pagelinks
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
