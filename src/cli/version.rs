//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: folio [OPTIONS]

With no options, opens the portfolio in the terminal.

Options:
  --html [PATH]   Write the static HTML page to PATH (stdout if omitted)
  --json          Print the composed page as JSON
  --check         Validate the portfolio content
  -V, --version   Print version
  -h, --help      Print this help

Environment:
  FOLIO_LOG             Tracing filter (default: folio=info)
  FOLIO_LOG_FILE        Log file for the terminal UI
  FOLIO_REDUCED_MOTION  Set to disable the reveal transition
";

pub fn version_line() -> String {
    format!("folio {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("folio "));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--html", "--json", "--check", "--version", "--help"] {
            assert!(USAGE.contains(flag));
        }
    }
}
