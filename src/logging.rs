//! Console Logger
//!
//! Routes the `log` facade to the browser console with a timestamp prefix.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            Level::Info => web_sys::console::info_1(&line.into()),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line.into()),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("09:15:02.120", Level::Info, "opportunity_client::client", "Fetched 3 opportunities");
        assert_eq!(line, "[09:15:02.120] INFO  opportunity_client::client: Fetched 3 opportunities");
    }

    #[test]
    fn test_format_line_error_level() {
        let line = format_line("00:00:00.000", Level::Error, "app", "boom");
        assert_eq!(line, "[00:00:00.000] ERROR app: boom");
    }
}
