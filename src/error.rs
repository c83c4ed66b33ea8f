//! Centralized error types for Chipfield.
//!
//! The widget itself never fails; everything here concerns startup
//! (configuration, candidate data) and the terminal.

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::DataError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Candidate data errors.
    #[error("{0}")]
    Data(#[from] DataError),

    /// IO errors (file system, terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Data(e) => match e {
                DataError::ReadError(_) => {
                    "Could not read the people file. Please check the path.".to_string()
                }
                DataError::ParseError(_) => {
                    "The people file is not valid JSON in the expected shape.".to_string()
                }
                DataError::DuplicateId(id) => {
                    format!("The people file lists id '{}' more than once.", id)
                }
                DataError::EmptyId(index) => {
                    format!("Entry {} in the people file has no id.", index)
                }
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }

    /// Whether startup must stop. A missing config directory only means
    /// defaults are used.
    pub fn is_critical(&self) -> bool {
        !matches!(self, AppError::Config(ConfigError::NoConfigDir))
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix or remove the config file, or pass --config with another path.")
            }
            AppError::Data(DataError::ReadError(_)) => {
                Some("Pass --data with an existing file, or omit it to use the sample list.")
            }
            AppError::Data(DataError::ParseError(_)) => {
                Some("Expected {\"data\": [{\"id\", \"name\", \"email\", \"avatar\"}, ...]}.")
            }
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
