//! Transport-level error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::TaskNotFound(_) => "Task not found. It may have been deleted.".to_string(),
            Self::Api { status, .. } if *status >= 500 => {
                "The task service is experiencing issues. Please try again later.".to_string()
            }
            Self::Api { .. } => "The request failed. Please try again.".to_string(),
            Self::Decode(_) => "Received an unexpected response. Please try again.".to_string(),
            Self::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Io(_) => "Could not read or write the configuration file.",
            Self::Parse(_) => "Configuration file is malformed. Check your settings.",
            Self::NoConfigDir => "Configuration directory unavailable. Using defaults.",
        }
    }
}
