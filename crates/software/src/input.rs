//! The panel's physical controls and the capabilities the board must provide so the poller can read them and report back
//! to the performer.

use crate::configuration::{BUTTON_A_NOTE, BUTTON_B_NOTE, TOUCH_PAD_NOTE};
use wmidi::Note;

mod switch;
pub use switch::*;

/// A snapshot of every control, taken once per poll.
///
/// The [`Default`] snapshot (nothing pressed, potentiometer at zero) stands in for the state of the panel at power-on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputState {
    /// Push button A.
    pub button_a: bool,
    /// Push button B.
    pub button_b: bool,
    /// The touch pad, which behaves as a third button.
    pub button_c: bool,
    /// Raw potentiometer reading, 0 to 1023.
    pub pot: u16,
}

impl InputState {
    /// Whether the control behind the given [`Key`] is held.
    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::A => self.button_a,
            Key::B => self.button_b,
            Key::C => self.button_c,
        }
    }
}

/// The three note-playing controls.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Push button A.
    A,
    /// Push button B.
    B,
    /// The touch pad.
    C,
}

impl Key {
    /// Every key, in the order the poller evaluates them.
    pub const ALL: [Key; 3] = [Key::A, Key::B, Key::C];

    /// The note this key plays.
    pub fn note(&self) -> Note {
        match self {
            Key::A => BUTTON_A_NOTE,
            Key::B => BUTTON_B_NOTE,
            Key::C => TOUCH_PAD_NOTE,
        }
    }

    /// The character shown on the indicator while the key is held.
    pub fn label(&self) -> char {
        match self {
            Key::A => 'a',
            Key::B => 'b',
            Key::C => 'c',
        }
    }
}

/// Capability for reading every control at once.
pub trait SampleInputs {
    /// Reads the current state of the panel. Implementations are expected to block until all readings are complete.
    fn sample(&mut self) -> InputState;
}

/// Capability for giving the performer visual feedback. Purely cosmetic; nothing depends on what (or whether) it displays.
pub trait Indicator {
    /// Displays the label of a [`Key`] that was just pressed.
    fn show(&mut self, label: char);

    /// Blanks the display.
    fn clear(&mut self);
}
