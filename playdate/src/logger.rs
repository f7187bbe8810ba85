//! `log` backend writing to the runtime console

use log::{Log, Metadata, Record};

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::system;

/// Forwards `log` records to `logToConsole`.
///
/// Records emitted before the runtime handle is populated are dropped.
pub struct ConsoleLogger {
    config: LoggerConfig,
}

impl ConsoleLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Render a record as a single console line.
    pub fn format(&self, record: &Record) -> String {
        let line = if self.config.show_target {
            format!("[{} {}] {}", record.level(), record.target(), record.args())
        } else {
            format!("[{}] {}", record.level(), record.args())
        };
        // logToConsole takes a C string
        line.replace('\0', "\\0")
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = system::log_to_console(&self.format(record));
    }

    fn flush(&self) {}
}

/// Install a [`ConsoleLogger`] as the global `log` backend.
pub fn init(config: LoggerConfig) -> Result<()> {
    let level = config.level;
    log::set_boxed_logger(Box::new(ConsoleLogger::new(config)))?;
    log::set_max_level(level);
    Ok(())
}
