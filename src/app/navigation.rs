//! Scrolling, anchor jumps and link activation.

use tracing::{debug, warn};

use super::App;
use crate::page::SectionId;

impl App {
    /// Scroll by a signed number of rows.
    pub(super) fn scroll_by(&mut self, rows: i64) {
        let amount = usize::try_from(rows.unsigned_abs()).unwrap_or(usize::MAX);
        let moved = if rows >= 0 {
            self.scroll.scroll_down(amount)
        } else {
            self.scroll.scroll_up(amount)
        };
        if moved {
            self.needs_redraw = true;
        } else if let Some(boundary) = self.scroll.boundary_hit() {
            debug!(?boundary, "scroll boundary");
        }
    }

    /// Move the viewport so `section` starts at the top. Only the scroll
    /// offset changes; theme, focus and reveal state are untouched.
    pub(super) fn jump_to(&mut self, section: SectionId) {
        match self.geometry.anchor_row(section) {
            Some(row) => self.scroll.jump_to(row),
            // Not laid out yet; resolve on the next layout pass.
            None => self.pending_jump = Some(section),
        }
        debug!(anchor = section.anchor(), "jump");
        self.needs_redraw = true;
    }

    pub(super) fn activate_focused(&mut self) {
        let Some(index) = self.focus.current() else {
            return;
        };
        let page = self.page();
        let Some(link) = page.links().get(index).copied().cloned() else {
            return;
        };
        match link.anchor_target() {
            Some(section) => self.jump_to(section),
            None => self.open_external(&link.href),
        }
    }

    /// Hand `href` to the link opener. Failures are logged, never fatal.
    pub(super) fn open_external(&self, href: &str) {
        match self.opener.open(href) {
            Ok(()) => debug!(href, "opened link"),
            Err(e) => warn!(href, error = %e, code = e.error_code(), "failed to open link"),
        }
    }
}
