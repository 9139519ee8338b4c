//! UI-related error types.
//!
//! Errors raised while driving the terminal or handing links to the system
//! opener. None of them are fatal to the page itself.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UiError {
    /// Terminal initialization failed.
    #[error("terminal initialization failed: {message}")]
    TerminalInitFailed { message: String },

    /// Drawing a frame failed.
    #[error("failed to render {component}: {message}")]
    RenderFailed { component: String, message: String },

    /// The system opener could not launch a link.
    #[error("could not open {url}: {message}")]
    BrowserLaunchFailed { url: String, message: String },
}

impl UiError {
    /// Check if this error is recoverable (UI can continue working).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, UiError::TerminalInitFailed { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to render {}.", component)
            }
            UiError::BrowserLaunchFailed { url, .. } => {
                format!("Could not open a browser. Please manually navigate to: {}", url)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::BrowserLaunchFailed { .. } => "E_UI_BROWSER",
        }
    }
}
