//! The launcher firing cycle.
//!
//! [`LauncherController`] owns the launcher motor and arm sensor.
//! [`LaunchSequencer`] drives them through one cycle per fire request and is
//! meant to run as its own task for the life of the program, see
//! [`LaunchSequencer::run`].

use std::time::Duration;

use heapless::Vec;
use log::{debug, error, info, warn};
use thiserror::Error;

use super::{FireSignal, LauncherConfig};
use crate::peripherals::{AngleSensor, BrakeMode, Clock, MAX_VOLTAGE, VoltageMotor};

/// A single command for the launcher motor.
///
/// A V5 voltage target releases any brake, so only [`Hold`](Self::Hold)
/// carries a brake mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorCommand {
    /// Drive at a voltage within `-MAX_VOLTAGE..=MAX_VOLTAGE`.
    Drive(f64),
    /// Zero voltage with the motor holding its position.
    Hold,
}

impl MotorCommand {
    /// Drive at `volts`, clamped to the motor's range.
    pub fn drive(volts: f64) -> Self { Self::Drive(volts.clamp(-MAX_VOLTAGE, MAX_VOLTAGE)) }
}

/// The launcher hardware: arm rotation sensor and pullback motor.
///
/// Whoever owns this value is the only writer to the launcher motor.
pub struct LauncherController<S, M> {
    sensor: S,
    motor:  M,
}

impl<S: AngleSensor, M: VoltageMotor> LauncherController<S, M> {
    pub fn new(sensor: S, motor: M) -> Self { Self { sensor, motor } }

    /// Current arm angle in centidegrees.
    pub fn arm_angle(&self) -> i32 { self.sensor.angle() }

    /// Sends `command` to the motor.
    pub fn apply(&mut self, command: MotorCommand) {
        match command {
            MotorCommand::Drive(volts) => self.motor.set_voltage(volts),
            MotorCommand::Hold => {
                self.motor.set_voltage(0.0);
                self.motor.brake(BrakeMode::Hold);
            }
        }
    }

    pub fn motor(&self) -> &M { &self.motor }
}

/// Where the launcher is within a firing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a fire request.
    #[default]
    Idle,
    /// Full voltage, arm position not yet trusted.
    RampUp,
    /// Full voltage, sampling the arm angle.
    PullbackWait,
    /// Reduced voltage inside the slow band.
    SlowApproach,
    /// Zero voltage with brake hold.
    Hold,
}

impl Phase {
    /// Number of phases. A cycle enters each phase at most once.
    pub const COUNT: usize = 5;
}

/// Phases entered during one cycle, in order.
pub type PhaseTrace = Vec<Phase, { Phase::COUNT }>;

/// A firing cycle that had to be abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LaunchFault {
    /// The arm never reached the pullback threshold.
    #[error("arm stalled at {angle} centidegrees after {waited:?} of pullback")]
    PullbackTimeout { angle: i32, waited: Duration },
}

/// How a firing cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The arm reached the pullback threshold and is held there.
    Completed,
    /// The cycle was cut short; the motor is stopped and holding.
    Aborted(LaunchFault),
}

/// Summary of one firing cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub outcome:     CycleOutcome,
    /// Phases in the order they were entered, ending with `Idle`.
    pub phases:      PhaseTrace,
    /// Number of arm angle samples taken.
    pub samples:     u32,
    /// Last arm angle read.
    pub final_angle: i32,
    /// Time from the fire request being served to the launcher being idle.
    pub elapsed:     Duration,
}

impl CycleReport {
    pub fn is_completed(&self) -> bool { self.outcome == CycleOutcome::Completed }
}

/// Lifetime counters of the launcher task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LauncherStats {
    /// Cycles that reached the pullback threshold.
    pub completed: u32,
    /// Cycles abandoned because of a fault.
    pub faults:    u32,
}

/// Runs firing cycles on a [`LauncherController`].
pub struct LaunchSequencer<S, M> {
    controller: LauncherController<S, M>,
    config:     LauncherConfig,
    phase:      Phase,
    trace:      PhaseTrace,
    stats:      LauncherStats,
}

impl<S: AngleSensor, M: VoltageMotor> LaunchSequencer<S, M> {
    /// Creates an idle sequencer.
    ///
    /// A `config` rejected by [`LauncherConfig::validate`] is logged and
    /// replaced by the defaults.
    pub fn new(controller: LauncherController<S, M>, config: LauncherConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                error!("Invalid Launcher Config ({}), using defaults", e);
                LauncherConfig::default()
            }
        };

        Self {
            controller,
            config,
            phase: Phase::Idle,
            trace: Vec::new(),
            stats: LauncherStats::default(),
        }
    }

    /// Serves fire requests from `signal` forever.
    ///
    /// Spawn this as its own task; it only returns control to the executor
    /// while waiting for a request or sleeping inside a cycle. The returned
    /// future never completes.
    pub async fn run<C: Clock>(mut self, signal: FireSignal, clock: C) {
        info!("Launcher Task Started");
        loop {
            self.next_cycle(&signal, &clock).await;
        }
    }

    /// Waits for one fire request and runs its cycle.
    pub async fn next_cycle<C: Clock>(&mut self, signal: &FireSignal, clock: &C) -> CycleReport {
        signal.take().await;
        self.fire(clock).await
    }

    /// Runs one complete firing cycle.
    ///
    /// The motor is always left at zero voltage with brake hold, whether the
    /// arm reached the threshold or the pullback timed out.
    pub async fn fire<C: Clock>(&mut self, clock: &C) -> CycleReport {
        let started = clock.now();
        let threshold = self.config.pullback_threshold;
        let slow_threshold = self.config.slow_threshold();
        self.trace.clear();

        self.enter(Phase::RampUp);
        self.controller.apply(MotorCommand::drive(self.config.full_voltage));
        clock.sleep(self.config.settle_delay).await;

        self.enter(Phase::PullbackWait);
        let pullback_started = clock.now();
        let mut samples = 0;
        let (outcome, final_angle) = loop {
            let angle = self.controller.arm_angle();
            samples += 1;

            if angle >= threshold {
                break (CycleOutcome::Completed, angle);
            }

            if self.phase == Phase::PullbackWait && angle > slow_threshold {
                self.enter(Phase::SlowApproach);
                self.controller.apply(MotorCommand::drive(self.config.slow_voltage()));
            }

            if let Some(timeout) = self.config.pullback_timeout {
                let waited = clock.now() - pullback_started;
                if waited >= timeout {
                    let fault = LaunchFault::PullbackTimeout { angle, waited };
                    break (CycleOutcome::Aborted(fault), angle);
                }
            }

            clock.sleep(self.config.poll_period).await;
        };

        self.enter(Phase::Hold);
        self.controller.apply(MotorCommand::Hold);
        match outcome {
            CycleOutcome::Completed => self.stats.completed += 1,
            CycleOutcome::Aborted(fault) => {
                self.stats.faults += 1;
                error!("Launch Aborted: {}", fault);
            }
        }
        clock.sleep(self.config.poll_period).await;
        self.enter(Phase::Idle);

        CycleReport {
            outcome,
            phases: self.trace.clone(),
            samples,
            final_angle,
            elapsed: clock.now() - started,
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!("Launcher {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        if let Err(phase) = self.trace.push(phase) {
            warn!("Phase Trace Full, {:?} not recorded", phase);
        }
    }

    /// The phase the launcher is currently in.
    pub fn phase(&self) -> Phase { self.phase }

    pub fn stats(&self) -> LauncherStats { self.stats }

    pub fn config(&self) -> &LauncherConfig { &self.config }

    pub fn controller(&self) -> &LauncherController<S, M> { &self.controller }
}
