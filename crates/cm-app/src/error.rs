//! Error types for the cm-app service layer.

use std::path::PathBuf;

/// Failures surfaced by one-shot queries and config loading. The interactive
/// session turns API errors into notices instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Api(#[from] cm_api::ApiError),

    #[error("Invalid time: {0}")]
    Time(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cm-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<cm_core::CoreError> for AppError {
    fn from(err: cm_core::CoreError) -> Self {
        AppError::Time(err.to_string())
    }
}
