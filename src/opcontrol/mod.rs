//! Driver control for the catapult robot.
//!
//! During the driver-controlled period an [`InputDispatcher`] is polled with
//! a fresh controller snapshot on every iteration of the driver loop:
//!
//! - **Drivetrain**: arcade drive from the sticks.
//! - **Intake**: L1 runs it forward, R1 in reverse.
//! - **Catapult**: each press of R2 requests one shot.
//! - **Pneumatics**: B extends both pistons, A retracts them.
//!
//! Button assignments and intake power live in [`DriverConfig`].
//!
//! # Example
//!
//! ```ignore
//! use catapult::opcontrol::{DriverConfig, InputDispatcher, controller::read_state};
//!
//! let mut dispatcher = InputDispatcher::new(
//!     drivetrain,
//!     intake,
//!     [wing_left, wing_right],
//!     fire,
//!     DriverConfig::default(),
//! );
//! loop {
//!     dispatcher.poll(&read_state(&controller));
//!     sleep(Controller::UPDATE_INTERVAL).await;
//! }
//! ```

use controller::ControllerButton;

use crate::peripherals::MAX_VOLTAGE;

/// Controller buttons and press detection.
///
/// Provides [`ControllerButton`](controller::ControllerButton) and the
/// [`ButtonEdge`](controller::ButtonEdge) latch used for one-shot actions.
pub mod controller;

/// The per-poll mapping from controller to robot.
pub mod dispatcher;

pub use dispatcher::{InputDispatcher, IntakeCommand, PollReport};

/// What the intake does when neither intake button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeIdle {
    /// Command zero volts.
    #[default]
    Stop,
    /// Send nothing, so the last command keeps running.
    KeepLast,
}

/// Button layout and intake power for driver control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverConfig {
    /// Runs the intake forward while held.
    pub intake_forward: ControllerButton,
    /// Runs the intake in reverse while held.
    pub intake_reverse: ControllerButton,
    /// Requests one catapult shot per press.
    pub fire:           ControllerButton,
    /// Extends the pistons while held.
    pub extend:         ControllerButton,
    /// Retracts the pistons while held.
    pub retract:        ControllerButton,
    /// Intake voltage magnitude.
    pub intake_voltage: f64,
    pub intake_idle:    IntakeIdle,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            intake_forward: ControllerButton::ButtonL1,
            intake_reverse: ControllerButton::ButtonR1,
            fire:           ControllerButton::ButtonR2,
            extend:         ControllerButton::ButtonB,
            retract:        ControllerButton::ButtonA,
            intake_voltage: MAX_VOLTAGE,
            intake_idle:    IntakeIdle::Stop,
        }
    }
}
