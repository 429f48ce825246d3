//! Controller buttons and press detection.
//!
//! Button levels come from a fresh controller snapshot every poll. Actions
//! that must happen once per press, like firing the catapult, go through a
//! [`ButtonEdge`] so holding the button does not repeat them.

use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState},
    prelude::Controller,
};

/// A list of Controller Buttons.
///
/// # Example
///
/// ```ignore
/// let fire = ButtonEdge::default();
/// let pressed = fire.update(state.is_held(ControllerButton::ButtonR2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

/// Rising edge detector for one button.
///
/// Remembers whether the button was held on the previous poll and reports
/// `true` only on the poll where it goes from released to held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    was_held: bool,
}

impl ButtonEdge {
    /// Feeds the level seen on this poll; returns `true` on a new press.
    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.was_held;
        self.was_held = held;
        pressed
    }

    /// Whether the button was held on the last poll.
    pub fn is_held(&self) -> bool { self.was_held }
}

/// Reads the controller, falling back to a released, centred state.
///
/// A disconnected controller is logged and then behaves like one nobody is
/// touching, so the robot stops instead of repeating stale inputs.
pub fn read_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}

pub(crate) fn get_button_state(state: ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}
