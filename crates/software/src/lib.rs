//! This crate contains architecture-agnostic logic for the MIDI Panel, a small controller which turns two push buttons, a
//! touch pad, and a potentiometer into [MIDI](https://midi.org/midi-1-0) Note On/Off and Control Change messages sent over
//! a 31.25 kbaud serial line (i.e., a classic 5-pin DIN MIDI OUT).
//!
//! Hardware is reached only through traits: [`embedded_io::Write`] for the serial sink,
//! [`embedded_hal::digital::InputPin`] for buttons, and this crate's own [`input::SampleInputs`] and [`input::Indicator`]
//! for everything else. That keeps the whole control loop testable on the host.

#![deny(missing_docs)]
#![no_std]

// must come first so the logging macros are visible to the modules below
mod fmt;

pub mod configuration;

pub mod input;

pub mod midi_out;

pub mod poller;
