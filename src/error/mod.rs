//! Error handling for folio.
//!
//! Rendering a static page has no recoverable-error taxonomy of its own. What
//! remains is ambient:
//!
//! | Category | Source | Example |
//! |----------|--------|---------|
//! | Content | authoring mistakes found by validation | duplicate project name |
//! | User | terminal or opener trouble | no browser registered |
//! | System | filesystem, serialization, logging | export path not writable |

mod category;
mod content;
mod folio_error;
mod result;
mod ui;

pub use category::ErrorCategory;
pub use content::ContentError;
pub use folio_error::FolioError;
pub use result::FolioResult;
pub use ui::UiError;
