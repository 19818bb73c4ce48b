//! Logging setup for the dashboard
//!
//! Log lines go to stderr so rendered tables and charts on stdout stay
//! clean. Optionally a daily rolling file is written as well.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kaddex_dashboard::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::new().with_debug(true).with_format(LogFormat::Compact);
//! init_logging(&config);
//! tracing::info!("Dashboard started");
//! ```

pub mod format;

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use format::{CompactFormatter, DashboardFormatter};

/// Name of the rolling log file
const LOG_FILE_NAME: &str = "kdxdash.log";

static INIT: Once = Once::new();

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the non-blocking file writer flushing for the life of the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS | LEVEL | target | message`
    #[default]
    Text,
    /// Newline-delimited JSON
    Json,
    /// `[LEVEL] message`
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!(
                "Invalid log format '{}'. Valid options: text, json, compact",
                s
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level DEBUG
    pub debug: bool,
    /// Minimum level TRACE (overrides debug)
    pub trace: bool,
    /// Also write to a rolling file in `logging_dir`
    pub record_log: bool,
    /// Directory for log files (supports ~ for home directory)
    pub logging_dir: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            trace: false,
            record_log: false,
            logging_dir: "~/.kaddex/logs".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.record_log = enabled;
        self
    }

    pub fn with_logging_dir(mut self, dir: impl Into<String>) -> Self {
        self.logging_dir = dir.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `KADDEX_DEBUG` / `KADDEX_TRACE`: raise the level (any value)
    /// - `KADDEX_LOG_FORMAT`: text, json or compact
    /// - `KADDEX_LOG_DIR`: enable file logging into this directory
    /// - `RUST_LOG`: standard filter, takes precedence at init
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if std::env::var("KADDEX_DEBUG").is_ok() {
            config.debug = true;
        }

        if std::env::var("KADDEX_TRACE").is_ok() {
            config.debug = true;
            config.trace = true;
        }

        if let Ok(format) = std::env::var("KADDEX_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                config.format = f;
            }
        }

        if let Ok(dir) = std::env::var("KADDEX_LOG_DIR") {
            config.logging_dir = dir;
            config.record_log = true;
        }

        config
    }

    fn get_level(&self) -> Level {
        if self.trace {
            Level::TRACE
        } else if self.debug {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    fn expand_path(&self) -> PathBuf {
        let path = &self.logging_dir;
        if let Some(stripped) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(path)
    }

    fn file_writer(&self) -> Option<NonBlocking> {
        if !self.record_log {
            return None;
        }
        let log_dir = self.expand_path();
        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!("Warning: Failed to create log directory {:?}: {}", log_dir, e);
            return None;
        }
        let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        Some(writer)
    }
}

/// Install the global subscriber. Only the first call has any effect.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        init_logging_internal(config);
        INITIALIZED.store(true, Ordering::SeqCst);
    });
}

/// Initialize with `LoggingConfig::from_env()`
pub fn init_default_logging() {
    init_logging(&LoggingConfig::from_env());
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

fn init_logging_internal(config: &LoggingConfig) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!(
            "{},hyper=warn,reqwest=warn,h2=warn",
            config.get_level()
        ))
    };
    let file_writer = config.file_writer();

    let result = match config.format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .event_format(DashboardFormatter)
                    .with_writer(io::stderr),
            )
            .with(file_writer.map(|w| {
                fmt::layer()
                    .event_format(DashboardFormatter)
                    .with_writer(w)
                    .with_ansi(false)
            }))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .with(file_writer.map(|w| fmt::layer().json().with_writer(w).with_ansi(false)))
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .event_format(CompactFormatter)
                    .with_writer(io::stderr),
            )
            .with(file_writer.map(|w| {
                fmt::layer()
                    .event_format(CompactFormatter)
                    .with_writer(w)
                    .with_ansi(false)
            }))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Warning: Logging already initialized: {}", e);
    }
}
