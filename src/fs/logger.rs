//! Console and SD card logger for the robot.
//!
//! This module implements the [`log`] facade. Every record is printed to the
//! terminal (visible over the USB serial link) and appended to `log.txt` on
//! the Brain's SD card, so launcher faults from a match can be read back
//! afterwards.
//!
//! # Usage
//!
//! ```ignore
//! use catapult::fs::logger;
//! use log::{LevelFilter, info};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(LevelFilter::Info).expect("Logger init failed");
//!     info!("Program started");
//! }
//! ```
//!
//! # Log Output
//!
//! ```text
//! INFO [2s 500ms] catapult::launcher::sequencer - Launcher Task Started
//! ERROR [1m 12s 40ms] catapult::launcher::sequencer - Launch Aborted: arm stalled at 310 ...
//! ```

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// File written on the SD card, truncated at start-up.
pub const LOG_FILE: &str = "log.txt";

/// Logger writing to the console and [`LOG_FILE`].
pub struct BrainLogger {
    /// `None` when the file could not be opened, e.g. no SD card inserted.
    file_writer: Mutex<Option<BufWriter<File>>>,
}

impl BrainLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for BrainLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record, uptime());
        print!("{}", line);

        if let Ok(mut writer) = self.file_writer.lock() {
            if let Some(writer) = writer.as_mut() {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.file_writer.lock() {
            if let Some(writer) = writer.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<BrainLogger> = OnceLock::new();

/// Installs the robot logger.
///
/// Call once at the top of `main`, before anything logs. Records below
/// `level` are discarded.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(BrainLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formats one record as `LEVEL [uptime] target - message`.
pub fn format_line(record: &Record, uptime: Duration) -> String {
    format!(
        "{} [{}] {} - {}\n",
        record.level(),
        format_duration(truncate_to_millis(uptime)),
        record.target(),
        record.args()
    )
}

fn truncate_to_millis(duration: Duration) -> Duration {
    Duration::from_millis(duration.as_millis() as u64)
}

/// Time since the user program started. Zero when not running on a Brain.
fn uptime() -> Duration {
    if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use log::{Level, LevelFilter, Record, debug, error, info, warn};

    use super::format_line;

    #[test]
    fn formats_level_uptime_and_target() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("Launcher Task Started"))
                .level(Level::Info)
                .target("catapult::launcher::sequencer")
                .build(),
            Duration::from_millis(2500),
        );
        assert_eq!(line, "INFO [2s 500ms] catapult::launcher::sequencer - Launcher Task Started\n");
    }

    #[test]
    fn drops_sub_millisecond_noise() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("Fire Requested, 1 pending"))
                .level(Level::Debug)
                .target("catapult::opcontrol::dispatcher")
                .build(),
            Duration::from_micros(72_000_417),
        );
        assert_eq!(line, "DEBUG [1m 12s] catapult::opcontrol::dispatcher - Fire Requested, 1 pending\n");
    }

    #[test]
    #[ignore = "filesystem access needed (file write)"]
    fn log_full_test() {
        super::init(LevelFilter::Trace).expect("Failed to initialize logger");

        debug!("Launcher SlowApproach -> Hold");
        info!("Launcher Task Started");
        warn!("Rotation Sensor Angle Error: port disconnected");
        error!("Launch Aborted: arm stalled");

        log::logger().flush();

        assert!(
            log::logger().enabled(
                &log::Metadata::builder()
                    .level(log::Level::Error)
                    .target("test")
                    .build()
            )
        );
    }
}
