#![deny(missing_docs)]
//! Shared logging utilities for the hacker stories workspace.
//!
//! This crate provides the `stories_*` logging macros used across the codebase,
//! the logger setup used by the binary, and a minimal test initializer for the
//! global logger.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

#[doc(hidden)]
pub use log;

/// Default log file, relative to the current working directory.
pub const DEFAULT_LOG_FILE: &str = "./hacker_stories.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! stories_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! stories_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! stories_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! stories_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! stories_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the configured log file.
    #[default]
    File,
    /// Write to the terminal (stderr, so the rendered list stays clean on stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Logger configuration assembled by the binary from its command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Where log records go.
    pub destination: LogDestination,
    /// Maximum level that is recorded.
    pub level: log::LevelFilter,
    /// File used by [`LogDestination::File`] and [`LogDestination::Both`].
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::File,
            level: log::LevelFilter::Info,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Initializes the global logger.
///
/// A log file that cannot be created is replaced by a stderr logger, and a
/// warning naming the file is logged once the logger is installed. Returns
/// `false` if a logger was already installed.
pub fn initialize(settings: &LogSettings) -> bool {
    let (loggers, file_error) = select_loggers(settings);
    if CombinedLogger::init(loggers).is_err() {
        return false;
    }
    if let Some(err) = file_error {
        stories_warn!(
            "Could not create log file at {:?}: {}; logging to the terminal instead",
            settings.file,
            err
        );
    }
    true
}

fn select_loggers(settings: &LogSettings) -> (Vec<Box<dyn SharedLogger>>, Option<io::Error>) {
    let config = build_config();
    let level = settings.level;
    let wants_terminal = matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    );
    let wants_file = matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    );

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    let mut file_error = None;
    if wants_file {
        match create_file_logger(level, config.clone(), &settings.file) {
            Ok(file_logger) => loggers.push(file_logger),
            Err(err) => file_error = Some(err),
        }
    }
    if wants_terminal || file_error.is_some() {
        loggers.push(TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    (loggers, file_error)
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: log::LevelFilter,
    config: Config,
    path: &Path,
) -> io::Result<Box<WriteLogger<File>>> {
    let file = File::create(path)?;
    Ok(WriteLogger::new(level, config, file))
}
