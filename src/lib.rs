//! # Catapult
//!
//! Driver control and launcher sequencing for a VEX V5 catapult robot, built
//! on [vexide](https://vexide.dev).
//!
//! - **Launcher**: a task that fires the catapult through a ramped,
//!   sensor-gated pullback once per request and leaves the arm held.
//! - **Operator Control**: arcade drive, intake, one-shot fire button and
//!   pneumatics from the primary controller.
//! - **Peripherals**: small device traits so the launcher and driver logic
//!   run against real V5 devices or simulated ones in tests.
//! - **Logging**: a console and SD card logger.
//!
//! Odometry and autonomous motion are left to a chassis library.
//!
//! ## Quick Start
//!
//! ```ignore
//! use catapult::{
//!     launcher::LauncherConfig,
//!     opcontrol::DriverConfig,
//!     robot::{Robot, RobotDevices},
//! };
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let devices = RobotDevices { /* ports */ };
//!     Robot::new(devices, LauncherConfig::default(), DriverConfig::default())
//!         .compete()
//!         .await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`launcher`]: Firing cycle, fire request channel and tuning.
//! - [`opcontrol`]: Controller input mapping for driver control.
//! - [`peripherals`]: Device traits, the V5 implementations and the drivetrain.
//! - [`robot`]: Competition lifecycle.
//! - [`fs`]: Logging.

/// Filesystem utilities module.
///
/// Contains the logger that records launcher and device events to the
/// V5 Brain's SD card.
pub mod fs;

/// Catapult launcher module.
///
/// Provides [`LaunchSequencer`](launcher::LaunchSequencer), which runs one
/// pullback cycle per [`FireSignal`](launcher::FireSignal) request, and its
/// [`LauncherConfig`](launcher::LauncherConfig).
pub mod launcher;

/// Operator control module.
///
/// Maps the primary controller to the drivetrain, intake, catapult and
/// pneumatics through [`InputDispatcher`](opcontrol::InputDispatcher).
pub mod opcontrol;

/// Device seam module.
///
/// Traits for the sensors and actuators the robot logic drives, with V5
/// implementations and the differential drivetrain.
pub mod peripherals;

/// Competition lifecycle module.
pub mod robot;
