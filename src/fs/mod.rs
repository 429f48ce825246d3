//! Filesystem utilities for the V5 Brain.
//!
//! # Logging
//!
//! The `logger` submodule installs a [`log`] backend that writes to the
//! terminal and to `log.txt` on the SD card. Launcher faults and controller
//! disconnects are logged there, which is often the only record of what
//! went wrong during a match.
//!
//! # Example
//!
//! ```ignore
//! use catapult::fs::logger;
//! use log::{LevelFilter, info};
//!
//! logger::init(LevelFilter::Info).expect("Failed to initialize logger");
//! info!("Robot initialized");
//! ```

/// Console and SD card logging.
pub mod logger;
