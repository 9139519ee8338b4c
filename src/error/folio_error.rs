//! Unified error type for the folio crate.

use thiserror::Error;

use super::category::ErrorCategory;
use super::content::ContentError;
use super::ui::UiError;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be installed.
    #[error("logging setup failed: {message}")]
    Logging { message: String },
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Content(_) => ErrorCategory::Content,
            FolioError::Ui(err) if err.is_recoverable() => ErrorCategory::User,
            FolioError::Ui(_) => ErrorCategory::System,
            FolioError::Io(_) | FolioError::Json(_) | FolioError::Logging { .. } => {
                ErrorCategory::System
            }
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Content(err) => format!("Portfolio content is invalid: {}", err),
            FolioError::Ui(err) => err.user_message(),
            FolioError::Io(err) => format!("A file operation failed: {}", err),
            FolioError::Json(err) => format!("Could not serialize the page: {}", err),
            FolioError::Logging { message } => format!("Logging is unavailable: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Content(err) => err.error_code(),
            FolioError::Ui(err) => err.error_code(),
            FolioError::Io(_) => "E_SYS_IO",
            FolioError::Json(_) => "E_SYS_JSON",
            FolioError::Logging { .. } => "E_SYS_LOGGING",
        }
    }
}
