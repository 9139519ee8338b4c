//! Row geometry of a laid-out document.
//!
//! The terminal renderer produces one of these alongside its lines. The app
//! uses it to resolve anchor jumps, scroll focused links into view and decide
//! which sections are in the viewport, without knowing anything about how the
//! rows were drawn.

use std::ops::Range;

use crate::page::SectionId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentGeometry {
    /// Total rows in the document
    pub total_rows: usize,
    /// Rows each section occupies, heading included, in page order
    pub sections: Vec<(SectionId, Range<usize>)>,
    /// Row of each entry of [`crate::page::Page::links`], `None` for links
    /// drawn outside the scrolling body (the resume action in the nav bar)
    pub link_rows: Vec<Option<usize>>,
}

impl DocumentGeometry {
    /// Row an in-page jump to `section` lands on.
    pub fn anchor_row(&self, section: SectionId) -> Option<usize> {
        self.sections
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, range)| range.start)
    }

    /// Section containing `row`, or the last one starting before it.
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.sections
            .iter()
            .take_while(|(_, range)| range.start <= row)
            .last()
            .map(|(id, _)| *id)
    }

    /// Anchors in document order.
    pub fn anchors(&self) -> Vec<SectionId> {
        self.sections.iter().map(|(id, _)| *id).collect()
    }
}
