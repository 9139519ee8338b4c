//! One-shot commands that render the page without a terminal.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::content::{portfolio, validate::validate};
use crate::error::FolioResult;
use crate::html::render_html;
use crate::page::compose;
use crate::state::ThemeMode;
use crate::traits::Clock;

/// Write the static HTML page to `path`, or to `out` when no path is given.
pub fn export_html<W: Write>(clock: &dyn Clock, path: Option<&Path>, out: &mut W) -> FolioResult<()> {
    let page = compose(portfolio(), ThemeMode::default(), clock);
    let html = render_html(&page);

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &html)?;
            info!(path = %path.display(), bytes = html.len(), "html exported");
            writeln!(out, "wrote {}", path.display())?;
        }
        None => out.write_all(html.as_bytes())?,
    }
    Ok(())
}

/// Print the composed page as pretty JSON.
pub fn export_json<W: Write>(clock: &dyn Clock, out: &mut W) -> FolioResult<()> {
    let page = compose(portfolio(), ThemeMode::default(), clock);
    serde_json::to_writer_pretty(&mut *out, &page)?;
    writeln!(out)?;
    Ok(())
}

/// Validate the content, listing every violation. Fails with the first one.
pub fn check_content<W: Write>(out: &mut W) -> FolioResult<()> {
    let errors = validate(portfolio());
    if errors.is_empty() {
        writeln!(out, "content ok")?;
        return Ok(());
    }
    for error in &errors {
        warn!(code = error.error_code(), "{}", error);
        writeln!(out, "error[{}]: {}", error.error_code(), error)?;
    }
    Err(errors[0].clone().into())
}
