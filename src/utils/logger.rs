//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. Log files are
//! opened in append mode so a processing history accumulates across runs,
//! one `<timestamp>:<LEVEL>:<message>` line per event.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use chrono::Local;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Timestamp layout used for every log line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// The file is opened for appending and created if missing, so earlier
    /// runs stay visible in the log.
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Writes a single formatted line to the log file
    ///
    /// # Arguments
    ///
    /// * `level` - Severity recorded in the line
    /// * `message` - The message to log
    pub fn log_line(&self, level: Level, message: &str) -> io::Result<()> {
        let line = format_line(level, message);
        if let Some(file) = &mut *self.file.lock().unwrap() {
            writeln!(file, "{}", line)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Records an informational event, ignoring log I/O failures
    pub fn info(&self, message: &str) {
        let _ = self.log_line(Level::Info, message);
    }

    /// Records a warning, ignoring log I/O failures
    pub fn warn(&self, message: &str) {
        let _ = self.log_line(Level::Warn, message);
    }

    /// Records an error, ignoring log I/O failures
    pub fn error(&self, message: &str) {
        let _ = self.log_line(Level::Error, message);
    }

    /// Static method to initialize the global logger
    ///
    /// Routes the `log` crate macros (info!, error!, ...) into the same
    /// file format used by instance loggers.
    pub fn init_global_logger(log_file: &str) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?;

        // Set up the global logger - we'll ignore the SetLoggerError
        // since we only call this once at startup
        if let Err(_) = log::set_boxed_logger(Box::new(global_logger)) {
            // Logger was already set - this should not happen in normal usage
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

/// Formats a message as `<timestamp>:<LEVEL>:<message>`
fn format_line(level: Level, message: &str) -> String {
    format!("{}:{}:{}",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            message)
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("{}", record.args());
            let _ = self.log_line(record.level(), &message);

            // Also print to console
            println!("[{}] {}", record.level(), message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log_line method
    }
}
