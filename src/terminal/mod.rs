//! Terminal lifecycle.
//!
//! [`TerminalManager`] puts the terminal into TUI mode when created and puts
//! it back when dropped. [`setup_panic_hook`] covers the panic path, where
//! the drop may never run.
//!
//! ```no_run
//! use folio::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> folio::error::FolioResult<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use std::io::{self, Stdout};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{FolioResult, UiError};

/// Restores the terminal on drop. Created only by [`TerminalManager`].
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls, including the one from `Drop`, do nothing.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with mouse capture and
    /// clear it.
    pub fn new() -> FolioResult<Self> {
        enable_raw_mode().map_err(init_failed)?;

        // From here on the guard owns cleanup, including on the error paths.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        tracing::info!("terminal initialized");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> FolioResult<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn init_failed(e: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: e.to_string(),
    }
}
