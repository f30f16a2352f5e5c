//! Build-time settings for the panel. None of these can be changed while the device is running; to assign different notes or
//! another channel, edit the constants and reflash.

use embassy_time::Duration;
use wmidi::Note;

/// The MIDI channel every message is sent on, zero-indexed (i.e., musicians call this "channel 1").
pub const MIDI_CHANNEL: u8 = 0;

/// Velocity sent with both NoteOn and NoteOff. The buttons aren't velocity sensitive, so they always hit as hard as possible.
pub const VELOCITY: u8 = 127;

/// Note played by button A.
pub const BUTTON_A_NOTE: Note = Note::C2;

/// Note played by button B.
pub const BUTTON_B_NOTE: Note = Note::Eb2;

/// Note played by the touch pad.
pub const TOUCH_PAD_NOTE: Note = Note::G2;

/// Control Change number the potentiometer is reported on.
///
/// CC 23 is left undefined by the MIDI 1.0 specification, so the receiving patch is free to map it to anything.
pub const POT_CONTROLLER: u8 = 23;

/// Number of distinct raw readings the potentiometer can produce; readings run from 0 to one less than this.
pub const POT_RESOLUTION: u16 = 1024;

/// MIDI 1.0 DIN transport: 31.25 kbaud, 8 data bits, no parity, 1 stop bit.
pub const BAUD_RATE: u32 = 31_250;

/// Time the poller sleeps between samples.
///
/// At [`BAUD_RATE`] a three-byte frame takes roughly a millisecond to shift out, so even a step that emits one frame per
/// input stays well inside the period.
pub const POLL_PERIOD: Duration = Duration::from_millis(10);
