use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Validation Types
// ============================================================================

/// A validation error with path and message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// JSON path to the error location.
    pub path: String,
    /// Human-readable error description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Result of settings validation.
#[derive(Debug)]
pub enum ValidationResult {
    /// Validation passed with no errors.
    Valid,
    /// Validation failed with one or more errors.
    Invalid(Vec<ValidationError>),
}

// ============================================================================
// Config Error
// ============================================================================

/// Error type for settings loading operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home directory not found.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// Settings file I/O error.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Settings file is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Settings file does not match the schema.
    #[error("settings validation failed: {}", format_validation_errors(.0))]
    ValidationFailed(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
