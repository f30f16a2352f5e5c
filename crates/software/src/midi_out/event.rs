//! Provides [`MidiEvent`], the three channel voice messages the panel knows how to send, and their serialization into a
//! three-byte [`Frame`].

/// Highest valid MIDI channel (zero-indexed).
const MAX_CHANNEL: u8 = 0x0F;

/// Highest value a MIDI data byte can carry; the top bit is reserved for status bytes.
const MAX_DATA: u8 = 0x7F;

/// The serialized form of a [`MidiEvent`]: a status byte followed by two data bytes.
pub type Frame = [u8; 3];

/// Kinds of message the panel emits. The discriminant is the high nibble of the status byte.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EventKind {
    /// Note Off, status `0x8n`.
    NoteOff = 0x80,
    /// Note On, status `0x9n`.
    NoteOn = 0x90,
    /// Control Change, status `0xBn`.
    ControlChange = 0xB0,
}

/// Identifies the field which made a [`MidiEvent`] unsendable, along with the offending value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidField {
    /// Channel above 15.
    Channel(u8),
    /// Note or controller number above 127.
    Data1(u8),
    /// Velocity or control value above 127.
    Data2(u8),
}

/// A MIDI channel voice message prior to validation.
///
/// Fields are stored as plain bytes so that out-of-range input can be represented (and subsequently rejected) rather than
/// clamped or wrapped on the way in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MidiEvent {
    kind: EventKind,
    channel: u8,
    data1: u8,
    data2: u8,
}

impl MidiEvent {
    /// Constructs a Note On.
    pub fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
        Self::new(EventKind::NoteOn, channel, note, velocity)
    }

    /// Constructs a Note Off.
    pub fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
        Self::new(EventKind::NoteOff, channel, note, velocity)
    }

    /// Constructs a Control Change.
    pub fn control_change(channel: u8, controller: u8, value: u8) -> Self {
        Self::new(EventKind::ControlChange, channel, controller, value)
    }

    fn new(kind: EventKind, channel: u8, data1: u8, data2: u8) -> Self {
        Self {
            kind,
            channel,
            data1,
            data2,
        }
    }

    /// Getter.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Checks every field against its bit width; the first field found out of range is reported.
    pub fn validate(&self) -> Result<(), InvalidField> {
        if self.channel > MAX_CHANNEL {
            return Err(InvalidField::Channel(self.channel));
        }
        if self.data1 > MAX_DATA {
            return Err(InvalidField::Data1(self.data1));
        }
        if self.data2 > MAX_DATA {
            return Err(InvalidField::Data2(self.data2));
        }
        Ok(())
    }

    /// Serializes the event as `[status | channel, data1, data2]`.
    pub fn encode(&self) -> Result<Frame, InvalidField> {
        self.validate()?;
        Ok([self.kind as u8 | self.channel, self.data1, self.data2])
    }
}
