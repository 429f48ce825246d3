use catapult::{
    fs::logger,
    launcher::LauncherConfig,
    opcontrol::DriverConfig,
    peripherals::drivetrain::Differential,
    robot::{Robot, RobotDevices},
};
use log::{LevelFilter, info};
use vexide::{prelude::*, smart::rotation::RotationSensor};

#[vexide::main]
async fn main(peripherals: Peripherals) {
    let _ = logger::init(LevelFilter::Info);
    info!("Program Started");

    let devices = RobotDevices {
        controller:      peripherals.primary_controller,
        drivetrain:      Differential::new(
            [
                Motor::new(peripherals.port_1, Gearset::Blue, Direction::Reverse),
                Motor::new(peripherals.port_2, Gearset::Blue, Direction::Reverse),
                Motor::new(peripherals.port_3, Gearset::Blue, Direction::Reverse),
            ],
            [
                Motor::new(peripherals.port_4, Gearset::Blue, Direction::Forward),
                Motor::new(peripherals.port_5, Gearset::Blue, Direction::Forward),
                Motor::new(peripherals.port_6, Gearset::Blue, Direction::Forward),
            ],
        ),
        intake:          Motor::new(peripherals.port_8, Gearset::Blue, Direction::Forward),
        pistons:         [
            AdiDigitalOut::new(peripherals.adi_a),
            AdiDigitalOut::new(peripherals.adi_b),
        ],
        launcher_sensor: RotationSensor::new(peripherals.port_9, Direction::Forward),
        launcher_motor:  Motor::new(peripherals.port_10, Gearset::Red, Direction::Forward),
    };

    Robot::new(devices, LauncherConfig::default(), DriverConfig::default())
        .compete()
        .await;
}
