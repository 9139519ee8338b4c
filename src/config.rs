//! Startup configuration.
//!
//! Use the builder methods to customize behavior, or [`StartupConfig::from_env`]
//! to pick up the `FOLIO_*` environment variables.

use std::path::PathBuf;

use crate::state::RevealMotion;

/// Disables the reveal transition when set to any value.
pub const ENV_REDUCED_MOTION: &str = "FOLIO_REDUCED_MOTION";
/// Tracing filter directive.
pub const ENV_LOG: &str = "FOLIO_LOG";
/// Log file path.
pub const ENV_LOG_FILE: &str = "FOLIO_LOG_FILE";

pub const DEFAULT_LOG_FILTER: &str = "folio=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Frame tick in milliseconds (default: 50)
    pub tick_ms: u64,
    /// Skip the reveal transition and show every section immediately
    pub reduced_motion: bool,
    /// Reveal transition length in ticks (default: 10, half a second at 50ms)
    pub reveal_duration_ticks: u64,
    /// Rows a section starts below its settled position
    pub reveal_offset_rows: u16,
    /// Rows of a section that must be visible before it reveals
    pub reveal_margin_rows: u16,
    /// Tracing filter directive (default: `folio=info`)
    pub log_filter: String,
    /// Log file; `None` falls back to [`default_log_file`]
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            reduced_motion: false,
            reveal_duration_ticks: 10,
            reveal_offset_rows: 1,
            reveal_margin_rows: 2,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms.max(1);
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_reveal_duration_ticks(mut self, ticks: u64) -> Self {
        self.reveal_duration_ticks = ticks;
        self
    }

    pub fn with_reveal_offset_rows(mut self, rows: u16) -> Self {
        self.reveal_offset_rows = rows;
        self
    }

    pub fn with_reveal_margin(mut self, rows: u16) -> Self {
        self.reveal_margin_rows = rows;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overridden by `FOLIO_REDUCED_MOTION`, `FOLIO_LOG` and `FOLIO_LOG_FILE`.
    pub fn from_env() -> Self {
        let mut config = Self::default()
            .with_reduced_motion(std::env::var_os(ENV_REDUCED_MOTION).is_some());

        if let Ok(filter) = std::env::var(ENV_LOG) {
            if !filter.trim().is_empty() {
                config = config.with_log_filter(filter);
            }
        }
        if let Some(path) = std::env::var_os(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        config
    }

    /// Reveal motion parameters derived from this config.
    pub fn reveal_motion(&self) -> RevealMotion {
        RevealMotion {
            enabled: !self.reduced_motion,
            duration_ticks: self.reveal_duration_ticks,
            offset_rows: self.reveal_offset_rows,
            margin_rows: self.reveal_margin_rows,
        }
    }

    /// Log file to write to.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_file)
    }
}

/// `<cache dir>/folio/folio.log`, when the platform has a cache directory.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("folio").join("folio.log"))
}
