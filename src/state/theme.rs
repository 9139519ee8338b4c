//! Light/dark theme state.
//!
//! [`ThemeState`] is the page's only mutable flag. It is owned by the
//! composition root ([`crate::app::App`]); everything downstream receives a
//! [`ThemeMode`] snapshot and can only request a flip through
//! [`crate::app::AppAction::ToggleTheme`].

use serde::Serialize;

use crate::content::Icon;

/// Scope class applied at the root of the rendered tree while dark.
pub const DARK_SCOPE_CLASS: &str = "dark";

/// The two theme states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Root scope flag: present only while dark.
    pub fn scope_class(self) -> Option<&'static str> {
        match self {
            ThemeMode::Dark => Some(DARK_SCOPE_CLASS),
            ThemeMode::Light => None,
        }
    }

    /// Icon shown on the toggle: the sun offers light while dark, the moon offers dark while light.
    pub fn indicator(self) -> Icon {
        match self {
            ThemeMode::Dark => Icon::Sun,
            ThemeMode::Light => Icon::Moon,
        }
    }
}

/// Owned theme cell. Starts dark.
#[derive(Debug, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip unconditionally and return the new state.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_dark() {
        let state = ThemeState::new();
        assert_eq!(state.mode(), ThemeMode::Dark);
        assert_eq!(state.mode().scope_class(), Some("dark"));
    }

    #[test]
    fn test_toggle_flips_once() {
        let mut state = ThemeState::new();
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state.mode().scope_class(), None);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for start in [ThemeMode::Dark, ThemeMode::Light] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn test_indicator_follows_state() {
        assert_eq!(ThemeMode::Dark.indicator(), Icon::Sun);
        assert_eq!(ThemeMode::Light.indicator(), Icon::Moon);
    }
}
