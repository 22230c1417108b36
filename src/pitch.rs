//! # Pitch Model
//!
//! The 12 pitch classes in the cyclic order used for fretboard index arithmetic.
//!
//! ## Two Orderings
//! - **Sequence index**: position in [`NOTE_SEQUENCE`], which starts at `E`
//!   (the open pitch of the outer strings). Used for all fret arithmetic.
//! - **Standard index**: `C = 0, C# = 1, ..., B = 11`. Used for the color table
//!   and for octave numbering, since octave numbers roll over at `C`.
//!
//! The two are related by `standard = (sequence + 4) mod 12`.
//!
//! ```rust
//! use fretboard::PitchClass;
//!
//! assert_eq!(PitchClass::E.index(), 0);
//! assert_eq!(PitchClass::E.standard_index(), 4);
//! assert_eq!(PitchClass::at(-1), PitchClass::DSharp);
//! assert_eq!(PitchClass::at(12), PitchClass::E);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;

/// Number of pitch classes in an octave.
pub const PITCH_CLASS_COUNT: i64 = 12;

/// Offset from sequence index to standard (C-rooted) index.
const STANDARD_OFFSET: i64 = 4;

/// A pitch class, independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
}

/// All pitch classes in sequence order (starting at E).
pub const NOTE_SEQUENCE: [PitchClass; 12] = [
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
];

/// Reduce `value` into `[0, modulus)`, also for negative values.
///
/// A plain `%` keeps the sign of the dividend, which would give negative
/// semitone distances whenever the sounded note sits below the root.
pub fn safe_mod(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}

/// Semitones from the note at sequence index `root_index` up to the note at
/// `sounded_index`, always in `0..12`. Either index may lie outside `0..12`.
pub fn semitone_distance(sounded_index: i64, root_index: i64) -> u8 {
    safe_mod(sounded_index - root_index, PITCH_CLASS_COUNT) as u8
}

/// Number of whole octaves crossed when moving `semitones` up from a pitch at
/// `standard_index` (C-rooted). Crossing from B to C counts as one octave.
pub fn octaves_crossed(standard_index: usize, semitones: i64) -> i32 {
    (standard_index as i64 + semitones).div_euclid(PITCH_CLASS_COUNT) as i32
}

impl PitchClass {
    /// Pitch class at an arbitrary (possibly negative) sequence index.
    pub fn at(index: i64) -> PitchClass {
        NOTE_SEQUENCE[safe_mod(index, PITCH_CLASS_COUNT) as usize]
    }

    /// Position in [`NOTE_SEQUENCE`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position in the C-rooted ordering (C = 0 ... B = 11).
    pub fn standard_index(self) -> usize {
        safe_mod(self.index() as i64 + STANDARD_OFFSET, PITCH_CLASS_COUNT) as usize
    }

    /// Sharp spelling, as shown on the fretboard.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
        }
    }

    /// Parse a note name. Accepts the sharp spellings and the flat aliases
    /// `Db`, `Eb`, `Gb`, `Ab`, `Bb`.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        let pitch = match name {
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "Gb" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#" | "Ab" => PitchClass::GSharp,
            "A" => PitchClass::A,
            "A#" | "Bb" => PitchClass::ASharp,
            "B" => PitchClass::B,
            "C" => PitchClass::C,
            "C#" | "Db" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#" | "Eb" => PitchClass::DSharp,
            _ => return None,
        };
        Some(pitch)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s).ok_or_else(|| FretboardError::InvalidRoot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_cyclic() {
        for (i, pitch) in NOTE_SEQUENCE.iter().enumerate() {
            assert_eq!(pitch.index(), i);
            assert_eq!(PitchClass::at(i as i64), *pitch);
            assert_eq!(PitchClass::at(i as i64 + 12), *pitch);
            assert_eq!(PitchClass::at(i as i64 - 12), *pitch);
        }
    }

    #[test]
    fn test_safe_mod_negative() {
        assert_eq!(safe_mod(-1, 12), 11);
        assert_eq!(safe_mod(-12, 12), 0);
        assert_eq!(safe_mod(-13, 12), 11);
        assert_eq!(safe_mod(25, 12), 1);
    }

    #[test]
    fn test_standard_index() {
        assert_eq!(PitchClass::C.standard_index(), 0);
        assert_eq!(PitchClass::CSharp.standard_index(), 1);
        assert_eq!(PitchClass::E.standard_index(), 4);
        assert_eq!(PitchClass::B.standard_index(), 11);
        for pitch in NOTE_SEQUENCE {
            assert_eq!(PitchClass::at(pitch.standard_index() as i64 - 4), pitch);
        }
    }

    #[test]
    fn test_semitone_distance() {
        let (c, e) = (PitchClass::C.index() as i64, PitchClass::E.index() as i64);
        assert_eq!(semitone_distance(e, c), 4);
        // E is below C in sequence order, distance must still be positive
        assert_eq!(semitone_distance(c, e), 8);
        assert_eq!(semitone_distance(c, c), 0);
        // fret 22 on the high E string sounds D, a whole step below E
        assert_eq!(semitone_distance(22, e), 10);
        assert_eq!(semitone_distance(24, e), 0);
        assert_eq!(semitone_distance(0, PitchClass::DSharp.index() as i64), 1);
    }

    #[test]
    fn test_octaves_crossed() {
        // E (standard 4) up 7 semitones = B, same octave
        assert_eq!(octaves_crossed(4, 7), 0);
        // E up 8 semitones = C, next octave
        assert_eq!(octaves_crossed(4, 8), 1);
        assert_eq!(octaves_crossed(4, 20), 2);
        assert_eq!(octaves_crossed(0, -1), -1);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("F#".parse::<PitchClass>(), Ok(PitchClass::FSharp));
        assert_eq!("Gb".parse::<PitchClass>(), Ok(PitchClass::FSharp));
        assert_eq!("Bb".parse::<PitchClass>(), Ok(PitchClass::ASharp));
        assert_eq!(
            "H".parse::<PitchClass>(),
            Err(FretboardError::InvalidRoot("H".to_string()))
        );
        assert_eq!(PitchClass::from_name("e"), None);
        for pitch in NOTE_SEQUENCE {
            assert_eq!(PitchClass::from_name(pitch.name()), Some(pitch));
        }
    }

    #[test]
    fn test_serialize_uses_sharp_names() {
        let json = serde_json::to_string(&PitchClass::GSharp).unwrap();
        assert_eq!(json, "\"G#\"");
    }
}
