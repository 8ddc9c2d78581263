//! Rolling Logger
//!
//! A `log` backend that prints to the browser console (stderr on native
//! targets) and keeps the most recent records in a circular buffer.

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Single-line rendering used for console output
    pub fn line(&self) -> String {
        format!(
            "{} [{}] {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// The last `n` buffered records, oldest first
    pub fn tail(&self, n: usize) -> Vec<LogEntry> {
        let buf = self.lock();
        buf.iter().skip(buf.len().saturating_sub(n)).cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&self, entry: LogEntry) {
        let mut buf = self.lock();
        while buf.len() >= self.capacity {
            buf.pop_front();
        }
        buf.push_back(entry);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogEntry>> {
        // A panic while holding the lock leaves the buffer usable.
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(entry.level, &entry.line());
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug => web_sys::console::debug_1(&msg),
        Level::Trace => web_sys::console::log_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Call once at startup.
pub fn init(level: Level, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level.to_level_filter(), capacity));
    log::set_logger(logger)?;
    log::set_max_level(level.to_level_filter());
    Ok(logger)
}

/// The installed logger, if `init` has run
pub fn logger() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest_past_capacity() {
        let logger = RollingLogger::new(LevelFilter::Info, 3);
        for msg in ["a", "b", "c", "d", "e"] {
            record_at(&logger, Level::Info, msg);
        }

        let recent: Vec<String> = logger.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(recent, vec!["c", "d", "e"]);
    }

    #[test]
    fn test_records_below_level_are_skipped() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        record_at(&logger, Level::Info, "quiet");
        record_at(&logger, Level::Error, "loud");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].level, Level::Error);
        assert_eq!(recent[0].target, "test");
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        record_at(&logger, Level::Info, "x");
        record_at(&logger, Level::Info, "y");
        assert_eq!(logger.capacity(), 1);
        assert_eq!(logger.recent()[0].message, "y");
    }

    #[test]
    fn test_line_contains_level_and_message() {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: Level::Warn,
            target: "booking".to_string(),
            message: "slow".to_string(),
        };
        let line = entry.line();
        assert!(line.contains("[WARN]"));
        assert!(line.ends_with("booking: slow"));
    }

    #[test]
    fn test_tail_returns_newest_in_order() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        for msg in ["boot", "route /", "config failed"] {
            record_at(&logger, Level::Info, msg);
        }

        let tail: Vec<String> = logger.tail(2).into_iter().map(|e| e.message).collect();
        assert_eq!(tail, vec!["route /", "config failed"]);
        assert_eq!(logger.tail(50).len(), 3);
        assert!(logger.tail(0).is_empty());
    }
}
