//! V5 device implementations of the peripheral seams.
//!
//! Device errors are logged with [`warn!`] and otherwise ignored, so a
//! disconnected cable never stops the control loops.

use std::{future::Future, time::Duration};

use log::warn;
use vexide::{
    controller::ControllerState,
    prelude::{AdiDigitalOut, Motor},
    smart::{motor::BrakeMode as VexBrakeMode, rotation::RotationSensor},
    time::{sleep, user_uptime},
};

use super::{AngleSensor, BrakeMode, Clock, OperatorInput, Piston, VoltageMotor};
use crate::opcontrol::controller::{ControllerButton, get_button_state};

impl AngleSensor for RotationSensor {
    fn angle(&self) -> i32 {
        match RotationSensor::angle(self) {
            Ok(angle) => (angle.as_degrees() * 100.0).round() as i32,
            Err(e) => {
                warn!("Rotation Sensor Angle Error: {}", e);
                0
            }
        }
    }
}

impl VoltageMotor for Motor {
    fn set_voltage(&mut self, volts: f64) {
        Motor::set_voltage(self, volts).unwrap_or_else(|e| {
            warn!("Motor Set Voltage Error: {}", e);
        });
    }

    fn brake(&mut self, mode: BrakeMode) {
        let mode = match mode {
            BrakeMode::Coast => VexBrakeMode::Coast,
            BrakeMode::Hold => VexBrakeMode::Hold,
        };
        Motor::brake(self, mode).unwrap_or_else(|e| {
            warn!("Motor Brake Error: {}", e);
        });
    }
}

impl Piston for AdiDigitalOut {
    fn set_extended(&mut self, extended: bool) {
        let result = if extended { self.set_high() } else { self.set_low() };
        result.unwrap_or_else(|e| {
            warn!("ADI Digital Out Error: {}", e);
        });
    }
}

impl OperatorInput for ControllerState {
    fn is_held(&self, button: ControllerButton) -> bool {
        get_button_state(*self, button).is_pressed()
    }

    fn left_y(&self) -> f64 { self.left_stick.y() }

    fn right_x(&self) -> f64 { self.right_stick.x() }
}

/// The vexide runtime clock.
///
/// `now` reports time since the user program started and `sleep` yields to
/// the vexide executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct VexClock;

impl Clock for VexClock {
    fn now(&self) -> Duration { user_uptime() }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> { sleep(duration) }
}
