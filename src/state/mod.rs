//! Transient UI state threaded through the page.
//!
//! - [`theme`] - the single theme flag owned by the composition root
//! - [`reveal`] - per-section one-shot reveal latches

pub mod reveal;
pub mod theme;

pub use reveal::{in_view, RevealLatch, RevealMotion, RevealPhase, RevealTracker};
pub use theme::{ThemeMode, ThemeState, DARK_SCOPE_CLASS};
