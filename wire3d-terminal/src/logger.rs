/// Process logger that feeds the status line.
///
/// The terminal is the render surface, so records are not printed; the most
/// recent one is kept for the overlay instead.
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::{const_mutex, Mutex};

static LOGGER: StatusLogger = StatusLogger {
    last: const_mutex(None),
};

pub struct StatusLogger {
    last: Mutex<Option<String>>,
}

impl StatusLogger {
    /// Install as the global logger
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }

    /// Most recent record, formatted as `LEVEL target: message`
    pub fn last_message() -> Option<String> {
        LOGGER.last.lock().clone()
    }

    fn format(record: &Record) -> String {
        format!("{} {}: {}", record.level(), record.target(), record.args())
    }
}

impl Log for StatusLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            *self.last.lock() = Some(Self::format(record));
        }
    }

    fn flush(&self) {}
}
