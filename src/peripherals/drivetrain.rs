//! Differential drivetrain driven with arcade controls.
//!
//! # Example
//!
//! ```ignore
//! use catapult::peripherals::{ArcadeDrive, drivetrain::Differential};
//! use vexide::prelude::*;
//!
//! let mut drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Blue, Direction::Reverse),
//!         Motor::new(peripherals.port_2, Gearset::Blue, Direction::Reverse),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Blue, Direction::Forward),
//!         Motor::new(peripherals.port_4, Gearset::Blue, Direction::Forward),
//!     ],
//! );
//!
//! drivetrain.arcade(0.5, 0.0); // half speed forward
//! ```

use log::warn;
use vexide::prelude::Motor;

use super::{ArcadeDrive, MAX_VOLTAGE};

/// A differential drivetrain with left and right motor groups.
///
/// Motors on opposite sides usually spin in opposite directions to move the
/// robot forward; configure motor directions when creating the motors.
pub struct Differential {
    left:  Vec<Motor>,
    right: Vec<Motor>,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    pub fn new(left: impl Into<Vec<Motor>>, right: impl Into<Vec<Motor>>) -> Self {
        Self {
            left:  left.into(),
            right: right.into(),
        }
    }

    fn drive_side(motors: &mut [Motor], volts: f64) {
        for motor in motors {
            motor.set_voltage(volts).unwrap_or_else(|e| {
                warn!("Drivetrain Set Voltage Error: {}", e);
            });
        }
    }
}

impl ArcadeDrive for Differential {
    /// Mixes `forward` and `turn` with [`arcade_mix`] and applies the result.
    fn arcade(&mut self, forward: f64, turn: f64) {
        let (left_voltage, right_voltage) = arcade_mix(forward, turn);
        Self::drive_side(&mut self.left, left_voltage);
        Self::drive_side(&mut self.right, right_voltage);
    }
}

/// Mixes arcade inputs into `(left, right)` voltages.
///
/// - left = (forward + turn) * 12.0
/// - right = (forward - turn) * 12.0
///
/// Each side is clamped to [`MAX_VOLTAGE`] so a full diagonal stick does not
/// request more than a motor accepts.
pub fn arcade_mix(forward: f64, turn: f64) -> (f64, f64) {
    let left = ((forward + turn) * MAX_VOLTAGE).clamp(-MAX_VOLTAGE, MAX_VOLTAGE);
    let right = ((forward - turn) * MAX_VOLTAGE).clamp(-MAX_VOLTAGE, MAX_VOLTAGE);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::arcade_mix;

    #[test]
    fn straight_forward_drives_both_sides() {
        assert_eq!(arcade_mix(0.5, 0.0), (6.0, 6.0));
    }

    #[test]
    fn turn_in_place_drives_sides_apart() {
        assert_eq!(arcade_mix(0.0, 1.0), (12.0, -12.0));
    }

    #[test]
    fn diagonal_is_clamped() {
        assert_eq!(arcade_mix(1.0, 1.0), (12.0, 0.0));
        assert_eq!(arcade_mix(-1.0, -0.5), (-12.0, -6.0));
    }
}
