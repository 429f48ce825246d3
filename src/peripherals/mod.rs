//! Device seams between the robot logic and the V5 hardware.
//!
//! The launcher sequencer and the input dispatcher never talk to vexide
//! devices directly. They are generic over the small traits in this module,
//! which are implemented for the real V5 devices in [`vex`] and for simulated
//! devices in the test-only `sim` module.
//!
//! # Units
//!
//! - Voltages are in volts, bounded to [`MAX_VOLTAGE`].
//! - Arm angles are in centidegrees (`9000` is 90 degrees).

use std::{future::Future, time::Duration};

use crate::opcontrol::controller::ControllerButton;

/// Differential drivetrain with arcade mixing.
///
/// Provides the [`Differential`](drivetrain::Differential) struct for
/// driving a robot with left and right motor groups.
pub mod drivetrain;

/// Seam implementations for the V5 devices provided by vexide.
pub mod vex;

#[cfg(test)]
pub(crate) mod sim;

/// Largest voltage a V5 smart motor accepts, in volts.
pub const MAX_VOLTAGE: f64 = 12.0;

/// How a motor behaves once it is told to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrakeMode {
    /// The motor spins freely.
    #[default]
    Coast,
    /// The motor actively holds its current position.
    Hold,
}

/// A rotation sensor reporting the absolute angle of a mechanism.
pub trait AngleSensor {
    /// Returns the current angle in centidegrees.
    ///
    /// Read failures are logged by the implementation and reported as `0`.
    fn angle(&self) -> i32;
}

/// A motor driven by a signed voltage.
pub trait VoltageMotor {
    /// Commands a voltage in volts. Values are expected within
    /// `-MAX_VOLTAGE..=MAX_VOLTAGE`.
    fn set_voltage(&mut self, volts: f64);

    /// Stops the motor using the given brake mode.
    fn brake(&mut self, mode: BrakeMode);
}

/// A single-acting pneumatic cylinder behind a solenoid.
pub trait Piston {
    /// Extends (`true`) or retracts (`false`) the cylinder.
    fn set_extended(&mut self, extended: bool);
}

/// A drivetrain accepting arcade-style inputs.
pub trait ArcadeDrive {
    /// Drives with `forward` and `turn` inputs in `[-1.0, 1.0]`.
    fn arcade(&mut self, forward: f64, turn: f64);
}

/// A snapshot of the operator's controller.
pub trait OperatorInput {
    /// Whether `button` is held down in this snapshot.
    fn is_held(&self, button: ControllerButton) -> bool;

    /// Left joystick vertical axis in `[-1.0, 1.0]`.
    fn left_y(&self) -> f64;

    /// Right joystick horizontal axis in `[-1.0, 1.0]`.
    fn right_x(&self) -> f64;
}

/// Time source and cooperative delay for long-running tasks.
pub trait Clock {
    /// Time since the program started.
    fn now(&self) -> Duration;

    /// Suspends the calling task for `duration`, letting other tasks run.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
