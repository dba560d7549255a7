//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to stderr and,
//! optionally, to a size-rotated file. `log` records are bridged into the
//! same subscriber.
//!
//! ```no_run
//! rolling_logger::LoggerBuilder::new("roadmap")
//!     .level("debug")
//!     .log_dir("/var/log/roadmap")
//!     .init()
//!     .expect("failed to init logger");
//! ```

mod rolling_file;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use rolling_file::RollingFile;

/// Default size of one log file before it is rotated
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Default number of rotated files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log filter '{0}'")]
    Filter(String),
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
    #[error("logger not initialized")]
    NotInitialized,
}

/// Local wall-clock timestamps, millisecond precision
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    app_name: String,
    level: String,
    log_dir: Option<PathBuf>,
    max_bytes: u64,
    max_files: usize,
}

impl LoggerBuilder {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            level: "info".to_string(),
            log_dir: None,
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset ("info", "roadmap=debug", ...)
    pub fn level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    /// Also write to `<dir>/<app_name>.log`
    pub fn log_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.log_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self.filter_with(from_env.as_deref())
    }

    /// `RUST_LOG` wins when it parses; otherwise the configured level must.
    fn filter_with(&self, from_env: Option<&str>) -> Result<EnvFilter, LoggerError> {
        if let Some(filter) = from_env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|_| LoggerError::Filter(self.level.clone()))
    }

    /// Install the global subscriber. Fails if one is already set.
    pub fn init(self) -> Result<(), LoggerError> {
        let filter = self.filter()?;

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_timer(LocalTimer)
            .with_target(true)
            .with_writer(std::io::stderr);

        let file_layer = match &self.log_dir {
            Some(dir) => {
                let file = RollingFile::open(dir, &self.app_name, self.max_bytes, self.max_files)?;
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_timer(LocalTimer)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

        INITIALIZED.store(true, Ordering::SeqCst);
        tracing::debug!(app = %self.app_name, dir = ?self.log_dir, "logger initialized");
        Ok(())
    }
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Log an info line through the `log` facade
pub fn info(message: &str) -> Result<(), LoggerError> {
    if !is_initialized() {
        return Err(LoggerError::NotInitialized);
    }
    log::info!("{}", message);
    Ok(())
}

/// Log an error line through the `log` facade
pub fn error(message: &str) -> Result<(), LoggerError> {
    if !is_initialized() {
        return Err(LoggerError::NotInitialized);
    }
    log::error!("{}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_require_init() {
        // No subscriber is installed in unit tests.
        assert!(matches!(info("hello"), Err(LoggerError::NotInitialized)));
        assert!(matches!(error("boom"), Err(LoggerError::NotInitialized)));
    }

    #[test]
    fn test_builder_settings() {
        let builder = LoggerBuilder::new("roadmap")
            .level("debug")
            .log_dir("/tmp/roadmap-logs")
            .max_bytes(1024)
            .max_files(5);
        assert_eq!(builder.level, "debug");
        assert_eq!(builder.log_dir, Some(PathBuf::from("/tmp/roadmap-logs")));
        assert_eq!(builder.max_bytes, 1024);
        assert_eq!(builder.max_files, 5);
    }

    #[test]
    fn test_filter_uses_level_without_env() {
        let filter = LoggerBuilder::new("roadmap").level("debug").filter_with(None).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_filter_prefers_env_directives() {
        let filter = LoggerBuilder::new("roadmap")
            .level("debug")
            .filter_with(Some("roadmap_server_lib=trace"))
            .unwrap();
        assert_eq!(filter.to_string(), "roadmap_server_lib=trace");
    }

    #[test]
    fn test_filter_rejects_bad_level() {
        let builder = LoggerBuilder::new("roadmap").level("roadmap=loud");
        assert!(matches!(builder.filter_with(None), Err(LoggerError::Filter(level)) if level == "roadmap=loud"));
        // Unparseable env falls back to the level, which is still bad
        assert!(matches!(builder.filter_with(Some("x=nope")), Err(LoggerError::Filter(_))));
    }
}
