//! The board has no character display, so the three user LEDs stand in for one: each key lights its own LED.

use embassy_stm32::gpio::Output;
use midi_panel_lib::input::Indicator;

/// LD1 (green), LD2 (blue), and LD3 (red) on the Nucleo-144.
pub struct Leds {
    green: Output<'static>,
    blue: Output<'static>,
    red: Output<'static>,
}

impl Leds {
    /// Constructs [`Leds`], all dark.
    pub fn new(green: Output<'static>, blue: Output<'static>, red: Output<'static>) -> Self {
        let mut leds = Self { green, blue, red };
        leds.clear();
        leds
    }
}

impl Indicator for Leds {
    fn show(&mut self, label: char) {
        self.clear();
        match label {
            'a' => self.green.set_high(),
            'b' => self.blue.set_high(),
            'c' => self.red.set_high(),
            other => warn!("No LED assigned to label {}", other),
        }
    }

    fn clear(&mut self) {
        self.green.set_low();
        self.blue.set_low();
        self.red.set_low();
    }
}
