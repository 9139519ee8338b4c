//! Error categories used to decide how an error is surfaced.

use std::fmt;

/// High-level classification of a [`super::FolioError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Static content breaks an authoring rule
    Content,
    /// Terminal or opener problem the user can usually work around
    User,
    /// OS, filesystem or serialization failure
    System,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Content => "content",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        };
        f.write_str(name)
    }
}
