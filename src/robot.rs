//! The competition robot.
//!
//! [`Robot`] ties the pieces together: it spawns the launcher task when it is
//! built and runs the driver loop during the driver-controlled period. The
//! two only share a [`FireSignal`].
//!
//! # Example
//!
//! ```ignore
//! use catapult::robot::{Robot, RobotDevices};
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let devices = RobotDevices { /* ... */ };
//!     Robot::new(devices, LauncherConfig::default(), DriverConfig::default())
//!         .compete()
//!         .await;
//! }
//! ```

use log::info;
use vexide::{
    prelude::{AdiDigitalOut, Compete, Controller, Motor},
    smart::rotation::RotationSensor,
    task::spawn,
    time::sleep,
};

use crate::{
    launcher::{FireSignal, LaunchSequencer, LauncherConfig, LauncherController},
    opcontrol::{DriverConfig, InputDispatcher, controller::read_state},
    peripherals::{drivetrain::Differential, vex::VexClock},
};

/// Every device the robot program drives.
pub struct RobotDevices {
    pub controller:      Controller,
    pub drivetrain:      Differential,
    pub intake:          Motor,
    pub pistons:         [AdiDigitalOut; 2],
    /// Rotation sensor on the catapult arm.
    pub launcher_sensor: RotationSensor,
    /// Motor pulling the catapult arm back.
    pub launcher_motor:  Motor,
}

/// The catapult robot.
pub struct Robot {
    controller: Controller,
    driver:     InputDispatcher<Differential, Motor, AdiDigitalOut>,
}

impl Robot {
    /// Builds the robot and starts the launcher task.
    ///
    /// An invalid `launcher_config` is logged and replaced by the defaults.
    pub fn new(
        devices: RobotDevices,
        launcher_config: LauncherConfig,
        driver_config: DriverConfig,
    ) -> Self {
        let launcher = LaunchSequencer::new(
            LauncherController::new(devices.launcher_sensor, devices.launcher_motor),
            launcher_config,
        );
        let fire = FireSignal::new(launcher.config().signal_mode);
        spawn(launcher.run(fire.clone(), VexClock)).detach();

        let driver = InputDispatcher::new(
            devices.drivetrain,
            devices.intake,
            devices.pistons,
            fire,
            driver_config,
        );

        Self {
            controller: devices.controller,
            driver,
        }
    }
}

impl Compete for Robot {
    async fn autonomous(&mut self) {
        info!("Autonomous Started, no routine configured");
    }

    async fn driver(&mut self) {
        info!("Driver Control Started");
        loop {
            let state = read_state(&self.controller);
            self.driver.poll(&state);
            sleep(Controller::UPDATE_INTERVAL).await;
        }
    }
}
