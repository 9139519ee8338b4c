//! Application state and logic for the TUI.
//!
//! [`App`] is the composition root. It owns the one [`ThemeState`] cell, the
//! scroll position, link focus and the per-section reveal latches, and hands
//! everything else a [`ThemeMode`] snapshot through [`App::page`]. State only
//! changes through [`App::dispatch`]; the renderer reports layout back through
//! [`App::sync_layout`].

mod actions;
mod focus;
mod navigation;

pub use actions::AppAction;
pub use focus::FocusRing;

use crate::config::StartupConfig;
use crate::content::{portfolio, Portfolio};
use crate::domain::{DocumentGeometry, ScrollState};
use crate::page::{compose, Page, SectionId};
use crate::state::{RevealTracker, ThemeMode, ThemeState};
use crate::traits::{Clock, LinkOpener, SystemClock, SystemOpener};

pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: set on state mutations, cleared after each draw
    pub needs_redraw: bool,
    /// Frame ticks since start; drives the reveal transition
    pub tick_count: u64,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    theme: ThemeState,
    scroll: ScrollState,
    reveal: RevealTracker,
    focus: FocusRing,
    /// Row geometry from the last layout pass
    geometry: DocumentGeometry,
    /// Anchor to land on once the next layout pass knows where it is
    pending_jump: Option<SectionId>,
    /// Scroll the focused link into view on the next layout pass
    focus_scroll_pending: bool,
    /// Footer year at the last draw
    last_year: i32,
    config: StartupConfig,
    portfolio: &'static Portfolio,
    clock: Box<dyn Clock>,
    opener: Box<dyn LinkOpener>,
}

impl App {
    /// App backed by the system clock and the OS link opener.
    pub fn new(config: StartupConfig) -> Self {
        Self::with_services(config, Box::new(SystemClock), Box::new(SystemOpener))
    }

    /// App with injected clock and opener.
    pub fn with_services(
        config: StartupConfig,
        clock: Box<dyn Clock>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let reveal = RevealTracker::new(config.reveal_motion());
        let mut app = Self {
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            theme: ThemeState::new(),
            scroll: ScrollState::new(),
            reveal,
            focus: FocusRing::default(),
            geometry: DocumentGeometry::default(),
            pending_jump: None,
            focus_scroll_pending: false,
            last_year: clock.current_year(),
            config,
            portfolio: portfolio(),
            clock,
            opener,
        };
        app.focus = FocusRing::new(app.page().links().len());
        app
    }

    pub fn config(&self) -> &StartupConfig {
        &self.config
    }

    /// Snapshot of the theme state.
    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Compose the page for the current theme and date.
    pub fn page(&self) -> Page {
        compose(self.portfolio, self.theme.mode(), self.clock.as_ref())
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn geometry(&self) -> &DocumentGeometry {
        &self.geometry
    }

    /// Index into [`Page::links`] of the focused link.
    pub fn focused_link(&self) -> Option<usize> {
        self.focus.current()
    }

    /// Section under the top of the viewport.
    pub fn current_section(&self) -> Option<SectionId> {
        self.geometry.section_at(self.scroll.offset())
    }

    pub fn is_animating(&self) -> bool {
        self.reveal.is_animating(self.tick_count)
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance one frame tick.
    ///
    /// Marks the frame dirty while a reveal is in flight or when the calendar
    /// year has rolled over since the last draw.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.is_animating() {
            self.needs_redraw = true;
        }

        let year = self.clock.current_year();
        if year != self.last_year {
            tracing::info!(from = self.last_year, to = year, "calendar year changed");
            self.last_year = year;
            self.needs_redraw = true;
        }
    }

    /// Record a terminal resize. The section at the top of the viewport stays
    /// there once the document has been re-laid out.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if width == self.terminal_width && height == self.terminal_height {
            return;
        }
        self.pending_jump = self.pending_jump.or(self.current_section());
        self.terminal_width = width;
        self.terminal_height = height;
        self.needs_redraw = true;
    }

    /// Take the geometry of a fresh layout pass.
    ///
    /// Clamps the scroll offset, resolves pending anchor jumps and focus
    /// scrolling, then feeds the viewport to the reveal latches.
    pub fn sync_layout(&mut self, geometry: DocumentGeometry, viewport_rows: usize) {
        self.scroll.update_limits(geometry.total_rows, viewport_rows);

        if let Some(section) = self.pending_jump.take() {
            if let Some(row) = geometry.anchor_row(section) {
                self.scroll.jump_to(row);
            }
        }

        if std::mem::take(&mut self.focus_scroll_pending) {
            if let Some(row) = self
                .focus
                .current()
                .and_then(|index| geometry.link_rows.get(index).copied().flatten())
            {
                self.scroll.ensure_visible(row);
            }
        }

        let revealed =
            self.reveal
                .observe_viewport(&geometry.sections, &self.scroll.viewport(), self.tick_count);
        if !revealed.is_empty() {
            self.needs_redraw = true;
        }

        self.geometry = geometry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{FixedClock, RecordingOpener};
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::rc::Rc;

    fn app() -> App {
        App::with_services(
            StartupConfig::default(),
            Box::new(FixedClock::ymd(2030, 6, 1).unwrap()),
            Box::new(RecordingOpener::new()),
        )
    }

    #[test]
    fn test_starts_dark_and_dirty() {
        let app = app();
        assert_eq!(app.theme(), ThemeMode::Dark);
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
        assert_eq!(app.focused_link(), None);
    }

    #[test]
    fn test_page_footer_uses_injected_clock() {
        assert_eq!(app().page().footer.year, 2030);
    }

    #[test]
    fn test_tick_is_quiet_when_idle() {
        let mut app = app();
        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);
        assert_eq!(app.tick_count, 1);
    }

    /// Clock whose date the test moves forward.
    struct SteppedClock(Rc<Cell<NaiveDate>>);

    impl Clock for SteppedClock {
        fn today(&self) -> NaiveDate {
            self.0.get()
        }
    }

    #[test]
    fn test_year_rollover_redraws_with_new_year() {
        let date = Rc::new(Cell::new(NaiveDate::from_ymd_opt(2029, 12, 31).unwrap()));
        let mut app = App::with_services(
            StartupConfig::default(),
            Box::new(SteppedClock(Rc::clone(&date))),
            Box::new(RecordingOpener::new()),
        );
        assert_eq!(app.page().footer.year, 2029);

        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);

        date.set(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        app.tick();
        assert!(app.needs_redraw);
        assert_eq!(app.page().footer.year, 2030);

        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_resize_marks_dirty_once() {
        let mut app = app();
        app.needs_redraw = false;
        app.update_terminal_dimensions(80, 24);
        assert!(!app.needs_redraw);
        app.update_terminal_dimensions(100, 30);
        assert!(app.needs_redraw);
        assert_eq!((app.terminal_width, app.terminal_height), (100, 30));
    }
}
