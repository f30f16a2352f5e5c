//! MIDI Panel is [Embassy](https://embassy.dev)-based firmware for a tiny MIDI controller: two push buttons and a touch pad
//! play three fixed notes, and a potentiometer sends a continuous controller. Messages go out over a UART at the MIDI baud
//! rate, so the board can drive a 5-pin DIN MIDI OUT jack (or a USB-MIDI interface's DIN input) directly. The firmware
//! runs on the [Nucleo-F767ZI development board](https://www.st.com/en/evaluation-tools/nucleo-f767zi.html), which is
//! powered by an F7-series STM32 microcontroller.
//!
//! All of the interesting behavior lives in `midi_panel_lib`; this crate wires the board's peripherals to it.
//!
//! | Control        | Pin   | Wiring                                     | Sends            |
//! |----------------|-------|--------------------------------------------|------------------|
//! | Button A       | PC13  | user button B1, active high                | note 36          |
//! | Button B       | PD1   | momentary switch to ground, pull-up        | note 39          |
//! | Touch pad      | PD0   | capacitive touch module output, pull-down  | note 43          |
//! | Potentiometer  | PA3   | wiper, ends across 3.3V and ground         | CC 23            |
//! | MIDI OUT       | PD5   | USART2 TX                                  |                  |

#![no_std]
#![no_main]

// must come first so the logging macros are visible to the modules below
mod fmt;

mod leds;
mod panel;

use crate::{leds::Leds, panel::Panel};
use embassy_executor::Spawner;
use embassy_stm32::{
    Config,
    adc::{Adc, AdcChannel as _, Resolution, SampleTime},
    gpio::{Input, Level, Output, Pull, Speed},
    mode::Blocking,
    usart::{self, DataBits, Parity, StopBits, UartTx},
};
use midi_panel_lib::{
    configuration::BAUD_RATE,
    input::{Polarity, Switch},
    midi_out::MidiOut,
    poller,
};

#[cfg(feature = "defmt-rtt")]
use defmt_rtt as _;
#[cfg(not(feature = "panic-probe"))]
use panic_halt as _;
#[cfg(feature = "panic-probe")]
use panic_probe as _;

type MidiUart = UartTx<'static, Blocking>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Initializing MIDI Panel");

    // nothing here needs more than the default 16MHz internal oscillator
    let p = embassy_stm32::init(Config::default());

    let mut uart_config = usart::Config::default();
    uart_config.baudrate = BAUD_RATE;
    uart_config.data_bits = DataBits::DataBits8;
    uart_config.parity = Parity::ParityNone;
    uart_config.stop_bits = StopBits::STOP1;
    // transmit only; MIDI IN is not supported
    let uart = unwrap!(UartTx::new_blocking(p.USART2, p.PD5, uart_config));
    let midi = MidiOut::new(uart);

    let button_a = Switch::new(Input::new(p.PC13, Pull::None), Polarity::ActiveHigh);
    let button_b = Switch::new(Input::new(p.PD1, Pull::Up), Polarity::ActiveLow);
    let touch_pad = Switch::new(Input::new(p.PD0, Pull::Down), Polarity::ActiveHigh);

    // per RM0410, PA3 is ADC123_IN3; 10 bits keeps readings in the 0-1023 range the poller expects
    let mut adc = Adc::new(p.ADC1);
    adc.set_resolution(Resolution::BITS10);
    // the wiper of a typical 10k pot is a high-impedance source, so give the sampling capacitor time to charge
    adc.set_sample_time(SampleTime::CYCLES112);
    let pot = p.PA3.degrade_adc();

    let panel = Panel::new(button_a, button_b, touch_pad, adc, pot);

    let leds = Leds::new(
        Output::new(p.PB0, Level::Low, Speed::Low),
        Output::new(p.PB7, Level::Low, Speed::Low),
        Output::new(p.PB14, Level::Low, Speed::Low),
    );

    unwrap!(spawner.spawn(poll_inputs(panel, midi, leds)));
}

/// Task responsible for the panel. Owns every peripheral it touches and never returns.
#[embassy_executor::task]
async fn poll_inputs(mut panel: Panel, mut midi: MidiOut<MidiUart>, mut leds: Leds) -> ! {
    poller::run(&mut panel, &mut midi, &mut leds).await
}
