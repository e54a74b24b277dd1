//! Process logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend once per process, to rotating files
//!   or to stderr.
//! - Keep engine events metadata-only: counts, indices and durations.
//!
//! # Invariants
//! - Initialization is idempotent for identical options.
//! - Re-initialization with different options is rejected, never applied.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "montree";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    options: LoggingOptions,
    _handle: LoggerHandle,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// One of `trace|debug|info|warn|error`; `warning` is accepted.
    pub level: String,
    /// Absolute directory for rotating files; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl LoggingOptions {
    pub fn stderr(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            log_dir: None,
        }
    }

    pub fn files(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: Some(log_dir.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    RelativeLogDir(PathBuf),
    /// Logging is already active with different options.
    AlreadyInitialized { active: String, requested: String },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => write!(
                f,
                "log_dir must be an absolute path, got `{}`",
                path.display()
            ),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized as {active}; refusing to switch to {requested}"
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Initializes process logging.
///
/// # Errors
/// - Unsupported level or relative directory.
/// - Conflicting re-initialization.
/// - Backend failure (directory creation, file open).
pub fn init_logging(options: &LoggingOptions) -> Result<(), LoggingError> {
    let normalized = LoggingOptions {
        level: normalize_level(&options.level)?.to_string(),
        log_dir: options
            .log_dir
            .as_deref()
            .map(normalize_log_dir)
            .transpose()?,
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_backend(&normalized))?;
    if state.options != normalized {
        return Err(LoggingError::AlreadyInitialized {
            active: describe(&state.options),
            requested: describe(&normalized),
        });
    }
    Ok(())
}

/// Active logging options, or `None` before initialization.
pub fn logging_status() -> Option<LoggingOptions> {
    LOGGING_STATE.get().map(|state| state.options.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_backend(options: &LoggingOptions) -> Result<LoggingState, LoggingError> {
    let logger = Logger::try_with_str(&options.level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    let handle = match &options.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                LoggingError::Backend(format!(
                    "failed to create log directory `{}`: {err}",
                    dir.display()
                ))
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        }
        None => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start(),
    }
    .map_err(|err| LoggingError::Backend(err.to_string()))?;

    info!(
        "event=core_init module=core status=ok level={} sink={} version={}",
        options.level,
        describe_sink(options),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        options: options.clone(),
        _handle: handle,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(dir: &Path) -> Result<PathBuf, LoggingError> {
    if !dir.is_absolute() {
        return Err(LoggingError::RelativeLogDir(dir.to_path_buf()));
    }
    Ok(dir.to_path_buf())
}

fn describe_sink(options: &LoggingOptions) -> String {
    match &options.log_dir {
        Some(dir) => format!("file:{}", dir.display()),
        None => "stderr".to_string(),
    }
}

fn describe(options: &LoggingOptions) -> String {
    format!("level={} sink={}", options.level, describe_sink(options))
}
