//! Maps a controller snapshot to drivetrain, intake, catapult and pneumatic
//! commands.

use log::debug;

use super::{DriverConfig, IntakeIdle, controller::ButtonEdge};
use crate::{
    launcher::FireSignal,
    peripherals::{ArcadeDrive, OperatorInput, Piston, VoltageMotor},
};

/// What the intake was told on a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeCommand {
    Forward,
    Reverse,
    Stop,
    /// No command was sent.
    Unchanged,
}

/// What a single [`InputDispatcher::poll`] commanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    /// A shot was requested on this poll.
    pub fired:   bool,
    pub intake:  IntakeCommand,
    /// Piston state written on this poll, if any.
    pub pistons: Option<bool>,
}

/// Driver control state: owns every driver-facing mechanism and the sending
/// half of the catapult's [`FireSignal`].
pub struct InputDispatcher<D, I, P> {
    drive:     D,
    intake:    I,
    pistons:   [P; 2],
    fire:      FireSignal,
    fire_edge: ButtonEdge,
    config:    DriverConfig,
}

impl<D: ArcadeDrive, I: VoltageMotor, P: Piston> InputDispatcher<D, I, P> {
    pub fn new(
        drive: D,
        intake: I,
        pistons: [P; 2],
        fire: FireSignal,
        config: DriverConfig,
    ) -> Self {
        Self {
            drive,
            intake,
            pistons,
            fire,
            fire_edge: ButtonEdge::default(),
            config,
        }
    }

    /// Applies one controller snapshot.
    ///
    /// The fire button only posts on the poll where it goes from released
    /// to held. Pistons are rewritten on every poll their button is held and
    /// left alone when neither button is held.
    pub fn poll(&mut self, input: &impl OperatorInput) -> PollReport {
        self.drive.arcade(input.left_y(), input.right_x());

        let intake = if input.is_held(self.config.intake_forward) {
            IntakeCommand::Forward
        } else if input.is_held(self.config.intake_reverse) {
            IntakeCommand::Reverse
        } else {
            match self.config.intake_idle {
                IntakeIdle::Stop => IntakeCommand::Stop,
                IntakeIdle::KeepLast => IntakeCommand::Unchanged,
            }
        };
        match intake {
            IntakeCommand::Forward => self.intake.set_voltage(self.config.intake_voltage),
            IntakeCommand::Reverse => self.intake.set_voltage(-self.config.intake_voltage),
            IntakeCommand::Stop => self.intake.set_voltage(0.0),
            IntakeCommand::Unchanged => {}
        }

        let fired = self.fire_edge.update(input.is_held(self.config.fire));
        if fired {
            self.fire.post();
            debug!("Fire Requested, {} pending", self.fire.pending());
        }

        let pistons = if input.is_held(self.config.extend) {
            Some(true)
        } else if input.is_held(self.config.retract) {
            Some(false)
        } else {
            None
        };
        if let Some(extended) = pistons {
            for piston in self.pistons.iter_mut() {
                piston.set_extended(extended);
            }
        }

        PollReport {
            fired,
            intake,
            pistons,
        }
    }

    pub fn drive(&self) -> &D { &self.drive }

    pub fn intake(&self) -> &I { &self.intake }

    pub fn pistons(&self) -> &[P; 2] { &self.pistons }

    pub fn config(&self) -> &DriverConfig { &self.config }
}
