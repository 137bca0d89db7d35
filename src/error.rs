//! Error types and handling for the `AstroAI` application

use thiserror::Error;

/// Main error type for the `AstroAI` application
#[derive(Error, Debug)]
pub enum AstroAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Completion endpoint communication errors
    #[error("Completion error: {message}")]
    Completion { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl AstroAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new completion error
    pub fn completion<S: Into<String>>(message: S) -> Self {
        Self::Completion {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AstroAiError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            AstroAiError::Completion { .. } => {
                "Unable to reach the reading service. Please try again later.".to_string()
            }
            AstroAiError::Validation { message } => message.clone(),
            AstroAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            AstroAiError::General { message } => message.clone(),
        }
    }
}
