//! Default keybindings.
//!
//! Maps key combinations to [`AppAction`]s. There are no modes or modals:
//! one flat table covers the whole page.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppAction;
use crate::page::SectionId;

/// Rows moved by one arrow or `j`/`k` press.
pub const LINE_STEP: u16 = 1;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Combo for a key event.
    ///
    /// Shift is dropped from character keys because the character already
    /// carries it (`G`, not `Shift+g`), and from `BackTab` because terminals
    /// disagree on whether to report it.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, AppAction>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            bindings: HashMap::new(),
        };
        config.setup_scroll_bindings();
        config.setup_section_bindings();
        config.setup_action_bindings();
        config
    }

    fn bind(&mut self, combo: KeyCombo, action: AppAction) {
        self.bindings.insert(combo, action);
    }

    fn setup_scroll_bindings(&mut self) {
        for code in [KeyCode::Down, KeyCode::Char('j')] {
            self.bind(KeyCombo::plain(code), AppAction::ScrollDown(LINE_STEP));
        }
        for code in [KeyCode::Up, KeyCode::Char('k')] {
            self.bind(KeyCombo::plain(code), AppAction::ScrollUp(LINE_STEP));
        }
        for code in [KeyCode::PageDown, KeyCode::Char(' ')] {
            self.bind(KeyCombo::plain(code), AppAction::PageDown);
        }
        self.bind(KeyCombo::plain(KeyCode::PageUp), AppAction::PageUp);
        for code in [KeyCode::Home, KeyCode::Char('g')] {
            self.bind(KeyCombo::plain(code), AppAction::ScrollToTop);
        }
        for code in [KeyCode::End, KeyCode::Char('G')] {
            self.bind(KeyCombo::plain(code), AppAction::ScrollToBottom);
        }
    }

    /// Digits jump to sections in nav order.
    fn setup_section_bindings(&mut self) {
        for (digit, section) in ('1'..='9').zip(SectionId::ALL) {
            self.bind(
                KeyCombo::plain(KeyCode::Char(digit)),
                AppAction::JumpTo(section),
            );
        }
    }

    fn setup_action_bindings(&mut self) {
        self.bind(KeyCombo::plain(KeyCode::Char('t')), AppAction::ToggleTheme);
        self.bind(KeyCombo::plain(KeyCode::Char('r')), AppAction::OpenResume);
        self.bind(KeyCombo::plain(KeyCode::Tab), AppAction::FocusNext);
        self.bind(KeyCombo::plain(KeyCode::BackTab), AppAction::FocusPrev);
        self.bind(KeyCombo::plain(KeyCode::Enter), AppAction::ActivateFocused);
        self.bind(KeyCombo::plain(KeyCode::Char('q')), AppAction::Quit);
        self.bind(KeyCombo::plain(KeyCode::Esc), AppAction::Quit);
        self.bind(KeyCombo::ctrl(KeyCode::Char('c')), AppAction::Quit);
    }

    pub fn get(&self, combo: &KeyCombo) -> Option<AppAction> {
        self.bindings.get(combo).copied()
    }

    /// Action for a key event. Key releases never map to an action.
    pub fn action_for_key(&self, key: &KeyEvent) -> Option<AppAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.get(&KeyCombo::from_event(key))
    }
}
