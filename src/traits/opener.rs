//! Link opener abstraction.
//!
//! External links and the resume reference leave the page through a
//! [`LinkOpener`]. The system implementation hands the URL to the OS, which
//! opens it in a separate browser process with no handle back to this one.

use std::sync::{Arc, Mutex};

use crate::error::UiError;

pub trait LinkOpener {
    fn open(&self, href: &str) -> Result<(), UiError>;
}

/// Opens links with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, href: &str) -> Result<(), UiError> {
        open::that(href).map_err(|e| UiError::BrowserLaunchFailed {
            url: href.to_string(),
            message: e.to_string(),
        })
    }
}

/// Records every href instead of opening it.
///
/// Clones share the same record, so a test can keep one clone and hand the
/// other to the app.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every href opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, href: &str) -> Result<(), UiError> {
        let mut opened = self.opened.lock().map_err(|e| UiError::BrowserLaunchFailed {
            url: href.to_string(),
            message: e.to_string(),
        })?;
        opened.push(href.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_opener_shares_record_between_clones() {
        let opener = RecordingOpener::new();
        let handle = opener.clone();
        opener.open("https://example.com").unwrap();
        opener.open("/resume.pdf").unwrap();
        assert_eq!(handle.opened(), vec!["https://example.com", "/resume.pdf"]);
    }
}
