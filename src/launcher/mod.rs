//! Catapult launcher sequencing.
//!
//! The launcher is driven by a dedicated task that sleeps until the driver
//! requests a shot, then runs one firing cycle:
//!
//! 1. **RampUp**: full voltage for a fixed settle delay so the arm starts
//!    moving before its position is trusted.
//! 2. **PullbackWait**: full voltage while the arm is below the slow band.
//! 3. **SlowApproach**: reduced voltage once the arm enters the band just
//!    below the pullback threshold.
//! 4. **Hold**: zero voltage with brake hold once the threshold is reached.
//!
//! Requests reach the task through a [`FireSignal`], so a long cycle never
//! blocks the driver control loop.
//!
//! # Example
//!
//! ```ignore
//! use catapult::{
//!     launcher::{FireSignal, LaunchSequencer, LauncherConfig, LauncherController},
//!     peripherals::vex::VexClock,
//! };
//! use vexide::prelude::*;
//!
//! let config = LauncherConfig::default();
//! let signal = FireSignal::new(config.signal_mode);
//! let controller = LauncherController::new(
//!     RotationSensor::new(peripherals.port_9, Direction::Forward),
//!     Motor::new(peripherals.port_10, Gearset::Red, Direction::Forward),
//! );
//!
//! spawn(LaunchSequencer::new(controller, config).run(signal.clone(), VexClock)).detach();
//! signal.post(); // fire once
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::peripherals::MAX_VOLTAGE;

/// Counting fire request channel.
pub mod signal;

/// The firing cycle state machine and the hardware it owns.
pub mod sequencer;

pub use sequencer::{
    CycleOutcome, CycleReport, LaunchFault, LaunchSequencer, LauncherController, LauncherStats,
    MotorCommand, Phase, PhaseTrace,
};
pub use signal::FireSignal;

/// What happens to a fire request posted while another one is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalMode {
    /// Every request is counted and runs its own cycle.
    #[default]
    Queue,
    /// Requests collapse into a single pending cycle.
    Coalesce,
}

/// Tuning for the firing cycle.
///
/// Angles are in centidegrees as reported by the arm's rotation sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LauncherConfig {
    /// Arm angle at which the catapult is loaded.
    pub pullback_threshold: i32,
    /// Width of the slow band just below `pullback_threshold`.
    pub slow_band:          i32,
    /// Voltage used to pull the arm back.
    pub full_voltage:       f64,
    /// Fraction of `full_voltage` used inside the slow band.
    pub slow_scale:         f64,
    /// How long full voltage is applied before the arm angle is sampled.
    pub settle_delay:       Duration,
    /// Delay between arm angle samples.
    pub poll_period:        Duration,
    /// Longest time the arm may take to reach the threshold once sampling
    /// starts. `None` waits forever.
    pub pullback_timeout:   Option<Duration>,
    /// Counting policy of the fire request channel.
    pub signal_mode:        SignalMode,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            pullback_threshold: 9000,
            slow_band:          1500,
            full_voltage:       MAX_VOLTAGE,
            slow_scale:         0.5,
            settle_delay:       Duration::from_millis(1000),
            poll_period:        Duration::from_millis(20),
            pullback_timeout:   Some(Duration::from_millis(3000)),
            signal_mode:        SignalMode::Queue,
        }
    }
}

impl LauncherConfig {
    /// Arm angle above which the approach slows down.
    pub fn slow_threshold(&self) -> i32 { self.pullback_threshold.saturating_sub(self.slow_band) }

    /// Voltage used inside the slow band.
    pub fn slow_voltage(&self) -> f64 { self.full_voltage * self.slow_scale }

    /// Checks that the tuning describes a cycle that can finish.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_period.is_zero() {
            return Err(ConfigError::ZeroPollPeriod);
        }
        if self.slow_band < 0 || self.slow_band >= self.pullback_threshold {
            return Err(ConfigError::SlowBand {
                band:      self.slow_band,
                threshold: self.pullback_threshold,
            });
        }
        if !(self.slow_scale > 0.0 && self.slow_scale <= 1.0) {
            return Err(ConfigError::SlowScale(self.slow_scale));
        }
        if !(self.full_voltage > 0.0 && self.full_voltage <= MAX_VOLTAGE) {
            return Err(ConfigError::FullVoltage(self.full_voltage));
        }
        if self.pullback_timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Rejected launcher tuning.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("poll period must be non-zero")]
    ZeroPollPeriod,
    #[error("slow band {band} must be within 0..{threshold}")]
    SlowBand { band: i32, threshold: i32 },
    #[error("slow scale {0} must be within (0, 1]")]
    SlowScale(f64),
    #[error("full voltage {0} must be within (0, 12]")]
    FullVoltage(f64),
    #[error("pullback timeout must be non-zero")]
    ZeroTimeout,
}
