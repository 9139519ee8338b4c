//! Integration tests for the theme toggle.
//!
//! The root scope flag must track the theme state through any number of
//! toggles, in the composed page, the exported HTML and the nav indicator.

use folio::app::{App, AppAction};
use folio::config::StartupConfig;
use folio::content::Icon;
use folio::html::render_html;
use folio::state::{ThemeMode, ThemeState, DARK_SCOPE_CLASS};
use folio::traits::{FixedClock, RecordingOpener};

fn app() -> App {
    App::with_services(
        StartupConfig::default(),
        Box::new(FixedClock::ymd(2030, 1, 1).unwrap()),
        Box::new(RecordingOpener::new()),
    )
}

#[test]
fn test_app_starts_with_dark_scope() {
    let app = app();
    assert_eq!(app.theme(), ThemeMode::Dark);
    assert_eq!(app.page().root_scope, Some(DARK_SCOPE_CLASS));
}

#[test]
fn test_toggle_sequence_tracks_root_scope() {
    let mut app = app();

    app.dispatch(AppAction::ToggleTheme);
    assert_eq!(app.theme(), ThemeMode::Light);
    assert_eq!(app.page().root_scope, None);

    app.dispatch(AppAction::ToggleTheme);
    assert_eq!(app.theme(), ThemeMode::Dark);
    assert_eq!(app.page().root_scope, Some(DARK_SCOPE_CLASS));
}

#[test]
fn test_even_number_of_toggles_restores_state() {
    let mut state = ThemeState::new();
    let start = state.mode();
    for _ in 0..10 {
        state.toggle();
    }
    assert_eq!(state.mode(), start);
}

#[test]
fn test_indicator_follows_toggle() {
    let mut app = app();
    assert_eq!(app.page().nav.theme_toggle.indicator, Icon::Sun);
    app.dispatch(AppAction::ToggleTheme);
    assert_eq!(app.page().nav.theme_toggle.indicator, Icon::Moon);
}

#[test]
fn test_toggle_marks_frame_dirty() {
    let mut app = app();
    app.needs_redraw = false;
    app.dispatch(AppAction::ToggleTheme);
    assert!(app.needs_redraw);
}

#[test]
fn test_html_root_follows_theme() {
    let mut app = app();
    assert!(render_html(&app.page()).contains("<div id=\"root\" class=\"dark\">"));

    app.dispatch(AppAction::ToggleTheme);
    let html = render_html(&app.page());
    assert!(html.contains("<div id=\"root\">"));
    assert!(!html.contains("<div id=\"root\" class=\"dark\">"));
}
