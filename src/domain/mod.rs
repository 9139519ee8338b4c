//! Renderer-independent domain objects for the interactive page.

pub mod geometry;
pub mod scroll;

pub use geometry::DocumentGeometry;
pub use scroll::{ScrollBoundary, ScrollState};
