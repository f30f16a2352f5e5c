//! The control loop: sample the panel, compare with the previous sample, and turn every difference into MIDI.
//!
//! The loop is single-threaded and runs at a fixed [`POLL_PERIOD`]. There is no exit condition; it stops when the board
//! loses power or is reset. Input state belongs to the [`Poller`] alone and lives no longer than a single previous sample.

use crate::{
    configuration::{MIDI_CHANNEL, POLL_PERIOD, POT_CONTROLLER, POT_RESOLUTION, VELOCITY},
    input::{Indicator, InputState, Key, SampleInputs},
    midi_out::MidiOut,
};
use bitmask_enum::bitmask;
use embassy_time::Timer;
use embedded_io::Write;

/// Inputs that differed from the previous sample during a [`Poller::step`].
#[bitmask(u8)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Change {
    /// Button A was pressed or released.
    ButtonA,
    /// Button B was pressed or released.
    ButtonB,
    /// The touch pad was touched or let go.
    ButtonC,
    /// The potentiometer reading moved.
    Pot,
}

impl From<Key> for Change {
    fn from(val: Key) -> Self {
        match val {
            Key::A => Change::ButtonA,
            Key::B => Change::ButtonB,
            Key::C => Change::ButtonC,
        }
    }
}

/// Scales a raw potentiometer reading to a 7-bit control value: `floor(raw / 1024 * 127)`.
///
/// Readings beyond the potentiometer's range saturate to `u8::MAX`, which the encoder then refuses to send.
pub fn pot_to_control_value(raw: u16) -> u8 {
    let scaled = u32::from(raw) * 127 / u32::from(POT_RESOLUTION);
    u8::try_from(scaled).unwrap_or(u8::MAX)
}

/// Edge detector for the panel. Holds the last sample and nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Poller {
    last: InputState,
}

impl Poller {
    /// Constructs a [`Poller`] which assumes the panel starts untouched with the potentiometer at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Getter.
    pub fn last(&self) -> InputState {
        self.last
    }

    /// Performs one iteration of the loop, minus the sleep: emits MIDI for every key that changed (in the order A, B, C)
    /// and for the potentiometer, then retains `sample` for the next comparison. Returns what changed.
    pub fn step<W: Write, D: Indicator>(
        &mut self,
        sample: InputState,
        midi: &mut MidiOut<W>,
        indicator: &mut D,
    ) -> Change {
        let mut change = Change::none();

        for key in Key::ALL {
            let note = u8::from(key.note());
            match (self.last.is_pressed(key), sample.is_pressed(key)) {
                (false, true) => {
                    info!("Key {} pressed, sending NoteOn {}", key, key.note().to_str());
                    midi.note_on(MIDI_CHANNEL, note, VELOCITY);
                    indicator.show(key.label());
                    change |= Change::from(key);
                }
                (true, false) => {
                    info!("Key {} released, sending NoteOff {}", key, key.note().to_str());
                    midi.note_off(MIDI_CHANNEL, note, VELOCITY);
                    indicator.clear();
                    change |= Change::from(key);
                }
                _ => {}
            }
        }

        if sample.pot != self.last.pot {
            let value = pot_to_control_value(sample.pot);
            debug!(
                "Potentiometer moved to {}, sending CC {} = {}",
                sample.pot,
                POT_CONTROLLER,
                value
            );
            midi.control_change(MIDI_CHANNEL, POT_CONTROLLER, value);
            change |= Change::Pot;
        }

        self.last = sample;
        change
    }
}

/// Runs the panel forever: sample, [`step`][Poller::step], sleep for [`POLL_PERIOD`], repeat.
///
/// The sleep is a fixed delay after each step rather than a fixed rate, so the true period is [`POLL_PERIOD`] plus however
/// long sampling and transmission took.
pub async fn run<I, W, D>(inputs: &mut I, midi: &mut MidiOut<W>, indicator: &mut D) -> !
where
    I: SampleInputs,
    W: Write,
    D: Indicator,
{
    let mut poller = Poller::new();
    info!("Polling inputs every {} ms", POLL_PERIOD.as_millis());
    loop {
        let sample = inputs.sample();
        let change = poller.step(sample, midi, indicator);
        if !change.is_none() {
            trace!("Step changed {}", change);
        }
        Timer::after(POLL_PERIOD).await;
    }
}
