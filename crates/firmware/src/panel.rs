//! Reads the panel's controls off the Nucleo board.

use embassy_stm32::{
    adc::{Adc, AnyAdcChannel},
    gpio::Input,
    peripherals::ADC1,
};
use midi_panel_lib::input::{InputState, SampleInputs, Switch};

/// Everything the performer can touch, wired to the board.
pub struct Panel {
    button_a: Switch<Input<'static>>,
    button_b: Switch<Input<'static>>,
    touch_pad: Switch<Input<'static>>,
    adc: Adc<'static, ADC1>,
    pot: AnyAdcChannel<ADC1>,
}

impl Panel {
    /// Constructs a [`Panel`]. The ADC is expected to already be set to 10-bit resolution so readings land in 0 to 1023.
    pub fn new(
        button_a: Switch<Input<'static>>,
        button_b: Switch<Input<'static>>,
        touch_pad: Switch<Input<'static>>,
        adc: Adc<'static, ADC1>,
        pot: AnyAdcChannel<ADC1>,
    ) -> Self {
        Self {
            button_a,
            button_b,
            touch_pad,
            adc,
            pot,
        }
    }
}

impl SampleInputs for Panel {
    fn sample(&mut self) -> InputState {
        let state = InputState {
            button_a: self.button_a.is_pressed(),
            button_b: self.button_b.is_pressed(),
            button_c: self.touch_pad.is_pressed(),
            pot: self.adc.blocking_read(&mut self.pot),
        };
        trace!("Sampled {}", state);
        state
    }
}
