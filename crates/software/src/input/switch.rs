//! Provides [`Switch`], which turns a GPIO into a pressed/released boolean regardless of how the control is wired.

use embedded_hal::digital::InputPin;

/// Describes which logic level a pin sits at while its control is engaged.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// The pin reads high while pressed, e.g., a button to VCC with a pull-down, or a touch sensor module.
    ActiveHigh,
    /// The pin reads low while pressed, e.g., a button to ground with a pull-up.
    ActiveLow,
}

/// A momentary control attached to a digital input.
pub struct Switch<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> Switch<P> {
    /// Constructs a [`Switch`].
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Returns `true` while the control is engaged.
    ///
    /// A failed read is reported as released; sensor faults are left to the platform.
    pub fn is_pressed(&mut self) -> bool {
        let read = match self.polarity {
            Polarity::ActiveHigh => self.pin.is_high(),
            Polarity::ActiveLow => self.pin.is_low(),
        };
        read.unwrap_or(false)
    }
}
