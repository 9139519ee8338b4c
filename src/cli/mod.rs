//! Command-line interface.
//!
//! Flags are handled before any terminal setup. Everything except the
//! default (no flags) runs once, writes to stdout and exits:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &mut std::io::stdout()) {
//!     // exit with the result
//! }
//! // No CLI command, continue to the TUI
//! ```

pub mod args;
pub mod export;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use export::{check_content, export_html, export_json};
pub use version::{version_line, USAGE, VERSION};

use std::io::Write;

use crate::error::FolioResult;
use crate::traits::SystemClock;

/// Run a one-shot command.
///
/// Returns `None` for [`CliCommand::RunTui`], which the caller handles.
pub fn run_cli_command<W: Write>(command: CliCommand, out: &mut W) -> Option<FolioResult<()>> {
    let result = match command {
        CliCommand::Version => writeln!(out, "{}", version_line()).map_err(Into::into),
        CliCommand::Help => out.write_all(USAGE.as_bytes()).map_err(Into::into),
        CliCommand::Check => check_content(out),
        CliCommand::ExportHtml(path) => export_html(&SystemClock, path.as_deref(), out),
        CliCommand::Json => export_json(&SystemClock, out),
        CliCommand::RunTui => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let mut out = Vec::new();
        assert!(run_cli_command(CliCommand::RunTui, &mut out).is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn test_version_prints_crate_version() {
        let mut out = Vec::new();
        run_cli_command(CliCommand::Version, &mut out)
            .unwrap()
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("folio {}\n", VERSION));
    }

    #[test]
    fn test_help_prints_usage() {
        let mut out = Vec::new();
        run_cli_command(CliCommand::Help, &mut out).unwrap().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), USAGE);
    }
}
