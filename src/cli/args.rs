//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Validate the compiled-in content
    Check,
    /// Write the static HTML page to a file, or stdout when `None`
    ExportHtml(Option<PathBuf>),
    /// Print the composed page as JSON
    Json,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments (program name first) into a command.
///
/// The first recognized flag wins; unknown arguments are ignored.
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--html".to_string(), "site.html".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::ExportHtml(Some("site.html".into()))
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--check" => return CliCommand::Check,
            "--json" => return CliCommand::Json,
            "--html" => {
                let path = args.next_if(|next| !next.starts_with('-')).map(PathBuf::from);
                return CliCommand::ExportHtml(path);
            }
            _ => {}
        }
    }
    CliCommand::RunTui
}
