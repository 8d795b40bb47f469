//! Rolling file logger
//!
//! Installs a global `tracing` subscriber writing to stderr and to a
//! size-rolled file. Records emitted through the `log` facade are bridged
//! into the same subscriber.

mod rolling_file;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use rolling_file::{RollingFile, SharedRollingFile};

pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_MAX_FILES: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to install logger: {0}")]
    Init(String),
    #[error("logger not initialized")]
    NotInitialized,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub app_name: String,
    pub max_bytes: u64,
    pub max_files: usize,
    /// Used when `RUST_LOG` is unset or invalid
    pub default_filter: String,
}

impl LoggerConfig {
    pub fn new(log_dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            log_dir: log_dir.into(),
            app_name: app_name.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
            default_filter: "info".to_string(),
        }
    }
}

struct Logger {
    log_path: PathBuf,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize with default limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_with(LoggerConfig::new(log_dir.as_ref(), app_name))
}

pub fn init_with(config: LoggerConfig) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::Init("already initialized".to_string()));
    }

    let file = RollingFile::open(
        &config.log_dir,
        &config.app_name,
        config.max_bytes,
        config.max_files,
    )?;
    let log_path = file.path(0);
    let file = SharedRollingFile::new(file);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file))
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    LOGGER
        .set(Logger {
            log_path: log_path.clone(),
        })
        .map_err(|_| LoggerError::Init("already initialized".to_string()))?;

    log::info!("logging to {}", log_path.display());
    Ok(())
}

fn logger() -> Result<&'static Logger, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    logger()?;
    log::info!(target: "rolling_logger", "{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    logger()?;
    log::warn!(target: "rolling_logger", "{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    logger()?;
    log::error!(target: "rolling_logger", "{}", message);
    Ok(())
}

/// Path of the live log file
pub fn log_file_path() -> Result<PathBuf, LoggerError> {
    Ok(logger()?.log_path.clone())
}
