//! # Playback
//!
//! Turns a clicked note into a playback request for an audio backend.
//!
//! Frequencies come from a fixed table of rounded concert pitches for octave 4
//! (A4 = 440.00 Hz) and are scaled by `2^(octave - 4)`. The table is used
//! as-is rather than recomputed from equal temperament so that values match
//! the published figures exactly.
//!
//! Sound generation itself is not done here. A request is handed to an
//! [`AudioSink`], fire-and-forget; overlapping requests are allowed.
//!
//! ```rust
//! use fretboard::playback::frequency_for_name;
//!
//! assert_eq!(frequency_for_name("A", 4), Some(440.0));
//! assert_eq!(frequency_for_name("A", 5), Some(880.0));
//! assert_eq!(frequency_for_name("Bb", 4), frequency_for_name("A#", 4));
//! assert_eq!(frequency_for_name("H", 4), None);
//! ```

use serde::Serialize;

use crate::mapper::HighlightedPosition;
use crate::pitch::PitchClass;

/// Default note length in seconds.
pub const DEFAULT_DURATION: f64 = 0.6;
/// Starting gain of the note envelope; it ramps linearly to silence.
pub const DEFAULT_GAIN: f64 = 0.2;

const REFERENCE_OCTAVE: i32 = 4;

/// Octave-4 frequencies, including flat aliases.
const NOTE_FREQUENCIES: [(&str, f64); 17] = [
    ("C", 261.63),
    ("C#", 277.18),
    ("Db", 277.18),
    ("D", 293.66),
    ("D#", 311.13),
    ("Eb", 311.13),
    ("E", 329.63),
    ("F", 349.23),
    ("F#", 369.99),
    ("Gb", 369.99),
    ("G", 392.00),
    ("G#", 415.30),
    ("Ab", 415.30),
    ("A", 440.00),
    ("A#", 466.16),
    ("Bb", 466.16),
    ("B", 493.88),
];

/// Frequency in Hz of a note name at an octave, or `None` for unknown names.
pub fn frequency_for_name(name: &str, octave: i32) -> Option<f64> {
    let (_, base) = NOTE_FREQUENCIES.iter().find(|(n, _)| *n == name)?;
    Some(base * 2f64.powi(octave - REFERENCE_OCTAVE))
}

/// Frequency in Hz of a pitch class at an octave.
pub fn frequency_of(pitch: PitchClass, octave: i32) -> f64 {
    // Every sharp spelling is in the table
    frequency_for_name(pitch.name(), octave).unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
}

/// A single note to sound.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackRequest {
    pub pitch_class: PitchClass,
    pub octave: i32,
    pub frequency: f64,
    pub duration: f64,
    pub gain: f64,
    pub waveform: Waveform,
}

impl PlaybackRequest {
    pub fn new(pitch_class: PitchClass, octave: i32, duration: f64) -> Self {
        PlaybackRequest {
            pitch_class,
            octave,
            frequency: frequency_of(pitch_class, octave),
            duration,
            gain: DEFAULT_GAIN,
            waveform: Waveform::Sine,
        }
    }

    pub fn for_position(position: &HighlightedPosition, duration: f64) -> Self {
        PlaybackRequest::new(position.pitch_class, position.octave, duration)
    }
}

/// Audio backend. Implementations should return immediately.
pub trait AudioSink {
    fn play(&mut self, request: &PlaybackRequest);
}

/// Sink that only logs what would be played.
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, request: &PlaybackRequest) {
        log::info!(
            "play {}{} ({:.2} Hz) for {:.2}s",
            request.pitch_class,
            request.octave,
            request.frequency,
            request.duration
        );
    }
}

/// Sink that records requests, for front ends that poll.
#[derive(Debug, Default)]
pub struct QueueSink {
    pub requests: Vec<PlaybackRequest>,
}

impl AudioSink for QueueSink {
    fn play(&mut self, request: &PlaybackRequest) {
        self.requests.push(request.clone());
    }
}
