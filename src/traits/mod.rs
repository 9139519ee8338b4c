//! Trait seams for the outside world.
//!
//! The page only touches two things it does not own: the current date (for
//! the footer) and the OS link handler (for external links and the resume).
//! Both sit behind traits so the app can be driven deterministically in tests.

pub mod clock;
pub mod opener;

pub use clock::{Clock, FixedClock, SystemClock};
pub use opener::{LinkOpener, RecordingOpener, SystemOpener};
