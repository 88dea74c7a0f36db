// Input module - keyboard and gamepad sources feeding the emulated controllers.
//
// `Controller` is a one-frame snapshot of the eight NES controller buttons.
// `UnifiedInputHandler` merges keyboard and gamepad state into one snapshot
// per player; `crate::controller::ControllerPort` turns that snapshot into
// the $4016/$4017 shift-register protocol the CPU bus exposes.

pub mod config;
pub mod gamepad;
pub mod keyboard;
pub mod unified;

pub use gamepad::{GamepadHandler, GamepadMapping};
pub use keyboard::{Button, KeyboardHandler, KeyboardMapping, Player};
pub use unified::UnifiedInputHandler;

/// A snapshot of the eight NES controller buttons for one player, for one
/// frame. Bit order matches the standard controller's serial read order:
/// A, B, Select, Start, Up, Down, Left, Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controller {
    pub button_a: bool,
    pub button_b: bool,
    pub select: bool,
    pub start: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Controller {
    /// Pack into the bit order a real NES controller shifts out: A, B,
    /// Select, Start, Up, Down, Left, Right, LSB first.
    pub fn to_bits(self) -> [bool; 8] {
        [
            self.button_a,
            self.button_b,
            self.select,
            self.start,
            self.up,
            self.down,
            self.left,
            self.right,
        ]
    }
}
