use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoResolveError>;

/// Errors outside the conversion core: configuration, logging setup and output rendering.
#[derive(Error, Debug)]
pub enum GeoResolveError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Settings validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Category of a failed conversion, shared by both converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    MissingInput,
    NonNumericInput,
    OutOfRange,
    ProjectionFailure,
}

/// A conversion request that cannot be resolved to a success.
///
/// Each variant carries the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    NonNumericInput(String),

    #[error("{0}")]
    OutOfRange(String),

    #[error("{message}. Please ensure coordinates are valid for the selected coordinate systems.")]
    ProjectionFailure { message: String },
}

impl ConversionError {
    pub fn projection(message: impl Into<String>) -> Self {
        Self::ProjectionFailure {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInput(_) => ErrorCategory::MissingInput,
            Self::NonNumericInput(_) => ErrorCategory::NonNumericInput,
            Self::OutOfRange(_) => ErrorCategory::OutOfRange,
            Self::ProjectionFailure { .. } => ErrorCategory::ProjectionFailure,
        }
    }
}
