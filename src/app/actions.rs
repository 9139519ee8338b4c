//! Actions and the single dispatch point that applies them.

use tracing::{debug, info};

use super::App;
use crate::page::SectionId;

/// Everything the user can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    ScrollDown(u16),
    ScrollUp(u16),
    PageDown,
    PageUp,
    ScrollToTop,
    ScrollToBottom,
    /// In-page jump to a section anchor
    JumpTo(SectionId),
    /// The only writer of the theme state
    ToggleTheme,
    OpenResume,
    FocusNext,
    FocusPrev,
    /// Follow the focused link
    ActivateFocused,
    Quit,
}

impl App {
    pub fn dispatch(&mut self, action: AppAction) {
        debug!(?action, "dispatch");
        match action {
            AppAction::ScrollDown(rows) => self.scroll_by(i64::from(rows)),
            AppAction::ScrollUp(rows) => self.scroll_by(-i64::from(rows)),
            AppAction::PageDown => {
                if self.scroll.page_down() {
                    self.needs_redraw = true;
                }
            }
            AppAction::PageUp => {
                if self.scroll.page_up() {
                    self.needs_redraw = true;
                }
            }
            AppAction::ScrollToTop => {
                self.scroll.scroll_to_top();
                self.needs_redraw = true;
            }
            AppAction::ScrollToBottom => {
                self.scroll.scroll_to_bottom();
                self.needs_redraw = true;
            }
            AppAction::JumpTo(section) => self.jump_to(section),
            AppAction::ToggleTheme => {
                let mode = self.theme.toggle();
                info!(?mode, "theme toggled");
                self.needs_redraw = true;
            }
            AppAction::OpenResume => {
                let href = self.page().nav.resume.href;
                self.open_external(&href);
            }
            AppAction::FocusNext => {
                self.focus.next();
                self.focus_scroll_pending = true;
                self.needs_redraw = true;
            }
            AppAction::FocusPrev => {
                self.focus.prev();
                self.focus_scroll_pending = true;
                self.needs_redraw = true;
            }
            AppAction::ActivateFocused => self.activate_focused(),
            AppAction::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartupConfig;
    use crate::state::ThemeMode;
    use crate::traits::{FixedClock, RecordingOpener};

    fn app_with(opener: RecordingOpener) -> App {
        App::with_services(
            StartupConfig::default(),
            Box::new(FixedClock::ymd(2030, 6, 1).unwrap()),
            Box::new(opener),
        )
    }

    #[test]
    fn test_toggle_theme_flips_and_marks_dirty() {
        let mut app = app_with(RecordingOpener::new());
        app.needs_redraw = false;
        app.dispatch(AppAction::ToggleTheme);
        assert_eq!(app.theme(), ThemeMode::Light);
        assert!(app.needs_redraw);
        app.dispatch(AppAction::ToggleTheme);
        assert_eq!(app.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_open_resume_uses_constant_reference() {
        let opener = RecordingOpener::new();
        let mut app = app_with(opener.clone());
        app.dispatch(AppAction::OpenResume);
        app.dispatch(AppAction::ToggleTheme);
        app.dispatch(AppAction::OpenResume);
        assert_eq!(opener.opened(), vec!["/resume.pdf", "/resume.pdf"]);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(RecordingOpener::new());
        app.dispatch(AppAction::Quit);
        assert!(app.should_quit);
    }
}
