//! Simulated devices for host tests.
//!
//! Time only moves when a task sleeps on [`SimClock`], so firing cycles run
//! to completion instantly and deterministically under
//! `embassy_futures::block_on`. Every sleep still yields to the executor once,
//! letting other futures joined with the sleeper make progress.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
    time::Duration,
};

use super::{AngleSensor, ArcadeDrive, BrakeMode, Clock, OperatorInput, Piston, VoltageMotor};
use crate::{launcher::FireSignal, opcontrol::controller::ControllerButton};

/// Virtual clock advanced by `sleep`.
#[derive(Default)]
pub struct SimClock {
    now:   Rc<Cell<Duration>>,
    posts: RefCell<Vec<(Duration, FireSignal)>>,
}

impl SimClock {
    /// Posts to `signal` once the clock reaches `at`.
    pub fn post_at(&self, at: Duration, signal: FireSignal) {
        self.posts.borrow_mut().push((at, signal));
    }
}

impl Clock for SimClock {
    fn now(&self) -> Duration { self.now.get() }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let now = self.now.get() + duration;
        self.now.set(now);
        self.posts.borrow_mut().retain(|(at, signal)| {
            if *at <= now {
                signal.post();
                false
            } else {
                true
            }
        });
        SimSleep { yielded: false }
    }
}

/// Sleep on a [`SimClock`]: pending once, then ready.
pub struct SimSleep {
    yielded: bool,
}

impl Future for SimSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Arm sensor replaying a list of angles, one per read.
///
/// Once the list runs out the last angle repeats, unless the sensor was
/// built with [`cycling`](ScriptedSensor::cycling).
pub struct ScriptedSensor {
    samples: Vec<i32>,
    next:    Cell<usize>,
    cycle:   bool,
}

impl ScriptedSensor {
    pub fn new(samples: &[i32]) -> Self {
        Self {
            samples: samples.to_vec(),
            next:    Cell::new(0),
            cycle:   false,
        }
    }

    /// Replays `samples` from the start every time they run out.
    pub fn cycling(samples: &[i32]) -> Self {
        Self {
            cycle: true,
            ..Self::new(samples)
        }
    }
}

impl AngleSensor for ScriptedSensor {
    fn angle(&self) -> i32 {
        let index = self.next.get();
        self.next.set(index + 1);
        match (self.samples.len(), self.cycle) {
            (0, _) => 0,
            (len, true) => self.samples[index % len],
            (len, false) => self.samples[index.min(len - 1)],
        }
    }
}

/// A command received by a [`RecordingMotor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorEvent {
    Voltage { volts: f64, at: Duration },
    Brake { mode: BrakeMode, at: Duration },
}

/// Motor recording every command with the simulated time it arrived.
#[derive(Default)]
pub struct RecordingMotor {
    now:        Rc<Cell<Duration>>,
    events:     Vec<MotorEvent>,
    voltage:    f64,
    brake_mode: BrakeMode,
}

impl RecordingMotor {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            now: clock.now.clone(),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[MotorEvent] { &self.events }

    /// Every commanded voltage in order.
    pub fn voltages(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|event| match event {
                MotorEvent::Voltage { volts, .. } => Some(*volts),
                MotorEvent::Brake { .. } => None,
            })
            .collect()
    }

    /// Voltage currently applied.
    pub fn voltage(&self) -> f64 { self.voltage }

    /// Brake mode currently applied.
    pub fn brake_mode(&self) -> BrakeMode { self.brake_mode }
}

impl VoltageMotor for RecordingMotor {
    fn set_voltage(&mut self, volts: f64) {
        // a voltage target releases any brake, as on a V5 motor
        self.voltage = volts;
        self.brake_mode = BrakeMode::Coast;
        self.events.push(MotorEvent::Voltage {
            volts,
            at: self.now.get(),
        });
    }

    fn brake(&mut self, mode: BrakeMode) {
        self.voltage = 0.0;
        self.brake_mode = mode;
        self.events.push(MotorEvent::Brake {
            mode,
            at: self.now.get(),
        });
    }
}

/// Piston remembering its last commanded state.
#[derive(Debug, Default)]
pub struct RecordingPiston {
    pub extended: Option<bool>,
    pub writes:   u32,
}

impl Piston for RecordingPiston {
    fn set_extended(&mut self, extended: bool) {
        self.extended = Some(extended);
        self.writes += 1;
    }
}

/// Drivetrain remembering its last arcade inputs.
#[derive(Debug, Default)]
pub struct RecordingDrive {
    pub last:    Option<(f64, f64)>,
    pub updates: u32,
}

impl ArcadeDrive for RecordingDrive {
    fn arcade(&mut self, forward: f64, turn: f64) {
        self.last = Some((forward, turn));
        self.updates += 1;
    }
}

/// A controller snapshot built by hand.
#[derive(Debug, Clone, Default)]
pub struct Buttons {
    held:    Vec<ControllerButton>,
    left_y:  f64,
    right_x: f64,
}

impl Buttons {
    /// Nothing held, sticks centred.
    pub fn none() -> Self { Self::default() }

    /// Only `buttons` held, sticks centred.
    pub fn held(buttons: &[ControllerButton]) -> Self {
        Self {
            held: buttons.to_vec(),
            ..Self::default()
        }
    }

    pub fn sticks(mut self, left_y: f64, right_x: f64) -> Self {
        self.left_y = left_y;
        self.right_x = right_x;
        self
    }
}

impl OperatorInput for Buttons {
    fn is_held(&self, button: ControllerButton) -> bool { self.held.contains(&button) }

    fn left_y(&self) -> f64 { self.left_y }

    fn right_x(&self) -> f64 { self.right_x }
}
