//! Scroll state for the page body.
//!
//! Offsets are document rows counted from the top of the page. Anchor jumps
//! only move the offset; nothing else about the page is touched.

use std::ops::Range;

/// Which end of the document a scroll ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBoundary {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// First document row shown
    offset: usize,
    /// Largest valid offset (total rows minus viewport height)
    max_offset: usize,
    /// Viewport height in rows
    viewport_rows: usize,
    /// Set when the last scroll ran into a boundary
    boundary_hit: Option<ScrollBoundary>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Document rows currently inside the viewport.
    pub fn viewport(&self) -> Range<usize> {
        self.offset..self.offset + self.viewport_rows
    }

    pub fn boundary_hit(&self) -> Option<ScrollBoundary> {
        self.boundary_hit
    }

    /// Update limits after a layout pass, clamping the current offset.
    pub fn update_limits(&mut self, total_rows: usize, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
        self.max_offset = total_rows.saturating_sub(viewport_rows);
        self.offset = self.offset.min(self.max_offset);
    }

    /// Scroll toward the end of the page.
    ///
    /// Returns true if the offset changed.
    pub fn scroll_down(&mut self, rows: usize) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
        self.boundary_hit = (self.offset == self.max_offset && rows > 0)
            .then_some(ScrollBoundary::Bottom);
        old != self.offset
    }

    /// Scroll toward the top of the page.
    ///
    /// Returns true if the offset changed.
    pub fn scroll_up(&mut self, rows: usize) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_sub(rows);
        self.boundary_hit = (self.offset == 0 && rows > 0).then_some(ScrollBoundary::Top);
        old != self.offset
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.viewport_rows.saturating_sub(1).max(1))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.viewport_rows.saturating_sub(1).max(1))
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.boundary_hit = None;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset;
        self.boundary_hit = None;
    }

    /// Put `row` at the top of the viewport, as far as the limits allow.
    pub fn jump_to(&mut self, row: usize) {
        self.offset = row.min(self.max_offset);
        self.boundary_hit = None;
    }

    /// Scroll the minimum amount that brings `row` into the viewport.
    pub fn ensure_visible(&mut self, row: usize) {
        if row < self.offset {
            self.offset = row;
        } else if self.viewport_rows > 0 && row >= self.offset + self.viewport_rows {
            self.offset = (row + 1 - self.viewport_rows).min(self.max_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize, viewport: usize) -> ScrollState {
        let mut s = ScrollState::new();
        s.update_limits(total, viewport);
        s
    }

    #[test]
    fn test_scroll_clamps_to_limits() {
        let mut s = state(100, 20);
        assert!(!s.scroll_up(5));
        assert_eq!(s.boundary_hit(), Some(ScrollBoundary::Top));
        assert!(s.scroll_down(500));
        assert_eq!(s.offset(), 80);
        assert_eq!(s.boundary_hit(), Some(ScrollBoundary::Bottom));
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let mut s = state(10, 20);
        assert!(!s.scroll_down(3));
        assert_eq!(s.viewport(), 0..20);
    }

    #[test]
    fn test_jump_and_resize_clamp() {
        let mut s = state(100, 20);
        s.jump_to(90);
        assert_eq!(s.offset(), 80);
        s.update_limits(50, 20);
        assert_eq!(s.offset(), 30);
    }

    #[test]
    fn test_ensure_visible() {
        let mut s = state(100, 10);
        s.ensure_visible(25);
        assert_eq!(s.offset(), 16);
        s.ensure_visible(3);
        assert_eq!(s.offset(), 3);
        s.ensure_visible(5);
        assert_eq!(s.offset(), 3);
    }

    #[test]
    fn test_paging() {
        let mut s = state(100, 10);
        assert!(s.page_down());
        assert_eq!(s.offset(), 9);
        assert!(s.page_up());
        assert_eq!(s.offset(), 0);
    }
}
