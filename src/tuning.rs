//! Fixed six-string tuning.
//!
//! Strings are ordered top-to-bottom as drawn: string 0 is the highest pitched
//! (high E), string 5 the lowest (low E).

use serde::Serialize;

use crate::pitch::{octaves_crossed, PitchClass};

pub const STRING_COUNT: usize = 6;

/// One string: its open pitch class and the octave number of the open note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringDef {
    pub index: usize,
    pub open: PitchClass,
    pub open_octave: i32,
}

/// Ordered string definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tuning {
    strings: [StringDef; STRING_COUNT],
}

/// Standard E A D G B E, listed high to low.
///
/// The octave numbers are the ones used for playback and are one octave above
/// written guitar pitch on the upper strings (E6 B5 G5 D5 A4 E4).
pub const STANDARD: Tuning = Tuning {
    strings: [
        StringDef { index: 0, open: PitchClass::E, open_octave: 6 },
        StringDef { index: 1, open: PitchClass::B, open_octave: 5 },
        StringDef { index: 2, open: PitchClass::G, open_octave: 5 },
        StringDef { index: 3, open: PitchClass::D, open_octave: 5 },
        StringDef { index: 4, open: PitchClass::A, open_octave: 4 },
        StringDef { index: 5, open: PitchClass::E, open_octave: 4 },
    ],
};

impl Default for Tuning {
    fn default() -> Self {
        STANDARD
    }
}

impl Tuning {
    pub fn standard() -> &'static Tuning {
        &STANDARD
    }

    pub fn strings(&self) -> &[StringDef] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn string_def(&self, string: usize) -> Option<&StringDef> {
        self.strings.get(string)
    }

    /// Sequence index of the open pitch of `string`.
    pub fn open_pitch_index(&self, string: usize) -> Option<usize> {
        self.string_def(string).map(|def| def.open.index())
    }

    /// Octave number of the note at `fret` on `string`.
    ///
    /// The open octave is bumped each time the fretted pitch passes a C, which
    /// is why the open pitch is rebased to its C-rooted index first.
    ///
    /// ```rust
    /// use fretboard::Tuning;
    ///
    /// let tuning = Tuning::standard();
    /// // high E string: E6 open, B6 at fret 7, C7 at fret 8
    /// assert_eq!(tuning.octave_at(0, 0), Some(6));
    /// assert_eq!(tuning.octave_at(0, 7), Some(6));
    /// assert_eq!(tuning.octave_at(0, 8), Some(7));
    /// ```
    pub fn octave_at(&self, string: usize, fret: usize) -> Option<i32> {
        let def = self.string_def(string)?;
        Some(def.open_octave + octaves_crossed(def.open.standard_index(), fret as i64))
    }
}
