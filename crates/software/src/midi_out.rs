//! Serial MIDI output.
//!
//! MIDI is fire-and-forget: frames are written synchronously to whatever byte sink the board provides, with no
//! acknowledgment and no retry. The convenience methods on [`MidiOut`] drop malformed events without complaint, matching the
//! behavior of the hardware this replaces; [`MidiOut::send`] is available for callers that want to know why an event went
//! nowhere.

use embedded_io::Write;

mod event;
pub use event::*;

/// Reasons [`MidiOut::send`] may fail.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError<E> {
    /// The event was rejected before anything was written.
    Invalid(InvalidField),
    /// The sink reported an error while the frame was being written.
    Write(E),
}

impl<E> From<InvalidField> for SendError<E> {
    fn from(val: InvalidField) -> Self {
        SendError::Invalid(val)
    }
}

/// A MIDI transmitter writing raw frames to a serial sink, e.g., a UART configured at
/// [`BAUD_RATE`][crate::configuration::BAUD_RATE].
pub struct MidiOut<W> {
    sink: W,
}

impl<W: Write> MidiOut<W> {
    /// Constructs a [`MidiOut`] which takes ownership of the sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Gives the sink back.
    pub fn release(self) -> W {
        self.sink
    }

    /// Validates and writes an event. Nothing reaches the sink unless every field is in range.
    pub fn send(&mut self, event: MidiEvent) -> Result<(), SendError<W::Error>> {
        let frame = event.encode()?;
        trace!("Writing frame {}", frame);
        self.sink.write_all(&frame).map_err(SendError::Write)
    }

    /// Sends a Note On, silently dropping it if any field is out of range.
    pub fn note_on(&mut self, channel: u8, note: u8, velocity: u8) {
        self.fire(MidiEvent::note_on(channel, note, velocity));
    }

    /// Sends a Note Off, silently dropping it if any field is out of range.
    pub fn note_off(&mut self, channel: u8, note: u8, velocity: u8) {
        self.fire(MidiEvent::note_off(channel, note, velocity));
    }

    /// Sends a Control Change, silently dropping it if any field is out of range.
    pub fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
        self.fire(MidiEvent::control_change(channel, controller, value));
    }

    fn fire(&mut self, event: MidiEvent) {
        match self.send(event) {
            Ok(()) => {}
            Err(SendError::Invalid(field)) => {
                warn!("Dropping {} with out-of-range field {}", event.kind(), field);
            }
            // hardware faults are the platform's problem; there is nothing useful to do here besides move on
            Err(SendError::Write(_)) => {
                warn!("Serial sink failed while writing {}", event.kind());
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_io::{ErrorKind, ErrorType};

    /// Test sink that records every byte written to it.
    pub(crate) struct Wire {
        bytes: [u8; 64],
        len: usize,
    }

    impl Wire {
        pub(crate) fn new() -> Self {
            Self {
                bytes: [0; 64],
                len: 0,
            }
        }

        pub(crate) fn bytes(&self) -> &[u8] {
            &self.bytes[..self.len]
        }

        pub(crate) fn frames(&self) -> impl Iterator<Item = &[u8]> {
            self.bytes().chunks(3)
        }
    }

    impl ErrorType for Wire {
        type Error = Infallible;
    }

    impl Write for Wire {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.bytes.len() - self.len);
            self.bytes[self.len..self.len + n].copy_from_slice(&buf[..n]);
            self.len += n;
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Sink whose hardware is permanently on fire.
    struct BrokenWire;

    impl ErrorType for BrokenWire {
        type Error = ErrorKind;
    }

    impl Write for BrokenWire {
        fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn note_on_writes_frame() {
        let mut midi = MidiOut::new(Wire::new());
        midi.note_on(0, 36, 127);
        assert_eq!(
            &[0x90, 36, 127],
            midi.release().bytes(),
            "Expected left but got right"
        );
    }

    #[test]
    fn frames_are_written_in_order() {
        let mut midi = MidiOut::new(Wire::new());
        midi.note_on(1, 39, 127);
        midi.control_change(1, 23, 10);
        midi.note_off(1, 39, 127);

        let wire = midi.release();
        let mut frames = wire.frames();
        assert_eq!(Some(&[0x91, 39, 127][..]), frames.next());
        assert_eq!(Some(&[0xB1, 23, 10][..]), frames.next());
        assert_eq!(Some(&[0x81, 39, 127][..]), frames.next());
        assert_eq!(None, frames.next());
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let mut midi = MidiOut::new(Wire::new());
        midi.note_on(16, 36, 127);
        midi.note_on(0, 128, 127);
        midi.note_on(0, 36, 128);
        midi.note_off(255, 36, 0);
        midi.control_change(0, 23, 200);
        assert!(
            midi.release().bytes().is_empty(),
            "No bytes should reach the sink"
        );
    }

    #[test]
    fn invalid_event_does_not_disturb_neighbors() {
        let mut midi = MidiOut::new(Wire::new());
        midi.note_on(0, 36, 127);
        midi.control_change(0, 23, 128);
        midi.note_off(0, 36, 127);
        assert_eq!(
            &[0x90, 36, 127, 0x80, 36, 127],
            midi.release().bytes(),
            "Expected left but got right"
        );
    }

    #[test]
    fn send_reports_invalid_field() {
        let mut midi = MidiOut::new(Wire::new());
        assert_eq!(
            Err(SendError::Invalid(InvalidField::Data2(128))),
            midi.send(MidiEvent::control_change(0, 23, 128)),
            "Expected left but got right"
        );
        assert!(midi.release().bytes().is_empty());
    }

    #[test]
    fn send_reports_write_failure() {
        let mut midi = MidiOut::new(BrokenWire);
        assert!(matches!(
            midi.send(MidiEvent::note_on(0, 36, 127)),
            Err(SendError::Write(_))
        ));
    }

    #[test]
    fn silent_drop_survives_write_failure() {
        let mut midi = MidiOut::new(BrokenWire);
        midi.note_on(0, 36, 127);
        midi.note_off(0, 36, 127);
    }
}
