//! Input translation.
//!
//! Terminal events become [`AppAction`]s here and nowhere else:
//!
//! ```text
//! KeyEvent / MouseEvent -> KeybindingConfig / action_for_mouse -> AppAction -> App::dispatch
//! ```

pub mod keybindings;

pub use keybindings::{KeyCombo, KeybindingConfig};

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::app::AppAction;

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: u16 = 3;

/// Wheel scrolling; every other mouse event is ignored.
pub fn action_for_mouse(event: &MouseEvent) -> Option<AppAction> {
    match event.kind {
        MouseEventKind::ScrollDown => Some(AppAction::ScrollDown(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(AppAction::ScrollUp(WHEEL_STEP)),
        _ => None,
    }
}
