//! Output layout and tracing setup for the report binary

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::{non_blocking::WorkerGuard, rolling::{RollingFileAppender, Rotation}};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_OUTPUT_ROOT: &str = "output";
const LOG_FILE_PREFIX: &str = "pool-report";

/// Directories the report binary writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn logs(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn reports(&self) -> PathBuf {
        self.root.join("reports")
    }

    pub fn create(&self) -> Result<()> {
        fs::create_dir_all(self.logs())?;
        fs::create_dir_all(self.reports())?;
        Ok(())
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_ROOT)
    }
}

/// Keeps the file writer flushing; drop it only when the process exits.
pub struct LoggingGuard {
    _file: WorkerGuard,
}

/// `RUST_LOG` wins when set, otherwise `info` (or `debug` when verbose).
pub fn log_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "pool_rentability=debug,info" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Human-readable lines on stderr (stdout carries the JSON report) and one
/// JSON object per event in a daily file under `log_dir`.
pub fn setup_logging(log_dir: &Path, verbose: bool) -> Result<LoggingGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("jsonl")
        .build(log_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    let file = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(file_writer)
        .with_current_span(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(console)
        .with(file)
        .try_init()?;

    Ok(LoggingGuard { _file: guard })
}
