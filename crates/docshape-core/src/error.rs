//! Error types for docshape

use thiserror::Error;

/// Result type alias using DocShapeError
pub type Result<T> = std::result::Result<T, DocShapeError>;

/// Error type alias for convenience
pub type Error = DocShapeError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
    pub const FORMAT_ERROR: i32 = 4;
}

/// Main error type for docshape
#[derive(Debug, Error)]
pub enum DocShapeError {
    #[error("Addressing error: {0}")]
    Addressing(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DocShapeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Addressing(_) | Self::InvalidInput(_) | Self::Config(_) => {
                exit_codes::INVALID_INPUT
            }
            Self::Format(_) => exit_codes::FORMAT_ERROR,
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    /// Whether the failure was caused by the request itself rather than the host
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Addressing(_) | Self::Format(_) | Self::InvalidInput(_)
        )
    }
}
