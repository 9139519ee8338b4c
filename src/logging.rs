//! Tracing setup.
//!
//! The terminal UI owns stdout, so interactive runs log to a file. One-shot
//! commands (export, check) log to stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{StartupConfig, DEFAULT_LOG_FILTER};
use crate::error::{FolioError, FolioResult};

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Log to the configured file through a non-blocking writer.
///
/// The returned guard flushes pending lines when dropped, so the caller
/// holds it for the whole run. Without a usable path logging stays off.
pub fn init_file_logging(config: &StartupConfig) -> FolioResult<Option<WorkerGuard>> {
    let Some(path) = config.log_file_path() else {
        return Ok(None);
    };
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Ok(None);
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .map_err(|e| FolioError::Logging {
            message: e.to_string(),
        })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| FolioError::Logging {
            message: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), "logging to file");
    Ok(Some(guard))
}

/// Log to stderr, for commands that write their result to stdout.
pub fn init_stderr_logging(config: &StartupConfig) -> FolioResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| FolioError::Logging {
            message: e.to_string(),
        })
}
