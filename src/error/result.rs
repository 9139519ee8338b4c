//! Result type alias for folio operations.

use super::folio_error::FolioError;

/// Type alias for Results using FolioError.
pub type FolioResult<T> = Result<T, FolioError>;
