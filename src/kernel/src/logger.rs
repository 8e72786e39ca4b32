//! `log` backend writing to the serial port.
//!
//! Records are formatted as `[LEVEL] target: message` on COM1.

use log::{LevelFilter, Log, Metadata, Record};

/// Logger that forwards every enabled record to the serial port.
pub struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        crate::serial_println!(
            "[{:<5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Initializes the serial port and installs [`SerialLogger`].
///
/// Idempotent - later calls only adjust the level.
pub fn init(level: LevelFilter) {
    crate::arch::x86_64::serial::init();
    // Err means a logger is already installed, which is fine.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
