//! # Fretboard Mapper
//!
//! Finds every (string, fret) position whose note belongs to a root plus an
//! optional chord or scale.
//!
//! ## Matching
//! For each string `s` and fret `f` in `0..=frets`:
//! 1. `sounded = open_index(s) + f` (sequence index, not yet reduced)
//! 2. `distance = (sounded - root) mod 12`, always in `0..12`
//! 3. With a chord or scale, the position matches when `distance` is in the
//!    interval set reduced modulo 12. Without one (single-note mode) it
//!    matches when the sounded pitch class is the root itself.
//!
//! Matches are returned ordered by string, then fret.
//!
//! ## Selection Policy
//! - Unknown root name: [`FretboardError::InvalidRoot`], nothing is computed.
//! - Unknown chord name: single-note mode plus an [`Advisory`]; not an error.
//! - Empty chord name: same as no chord, without an advisory.
//!
//! ## Example
//! ```rust
//! use fretboard::{Catalog, Fretboard, PitchClass, Tuning};
//!
//! let board = Fretboard::new(Catalog::standard(), Tuning::standard(), 21);
//! let highlights = board.highlights("A", Some("Power Chord (5)")).unwrap();
//!
//! assert!(highlights
//!     .positions
//!     .iter()
//!     .all(|p| p.pitch_class == PitchClass::A || p.pitch_class == PitchClass::E));
//! assert!(highlights.advisory.is_none());
//! ```
//!
//! ## Sub-modules
//! - `types` - HighlightedPosition, Highlights, Advisory

mod types;

#[cfg(test)]
mod tests;

pub use types::{Advisory, HighlightedPosition, Highlights};

use crate::catalog::{Catalog, IntervalSet};
use crate::color::{color_of, wavelength_nm};
use crate::config::FretboardConfig;
use crate::error::FretboardError;
use crate::pitch::{semitone_distance, PitchClass};
use crate::tuning::Tuning;

/// Number of frets on the board (fret 0 is the open string).
pub const DEFAULT_FRETS: usize = 21;

/// Enumerate matching positions for `root` and an optional interval set.
///
/// `None` selects single-note mode.
pub fn map_positions(
    root: PitchClass,
    intervals: Option<&IntervalSet>,
    tuning: &Tuning,
    frets: usize,
) -> Vec<HighlightedPosition> {
    let targets = intervals.map(IntervalSet::pitch_class_set);
    let root_index = root.index() as i64;
    let mut positions = Vec::new();

    for string in 0..tuning.string_count() {
        let Some(open_index) = tuning.open_pitch_index(string) else {
            continue;
        };
        for fret in 0..=frets {
            let sounded_index = (open_index + fret) as i64;
            let sounded = PitchClass::at(sounded_index);

            let matches = match &targets {
                Some(targets) => targets.contains(&semitone_distance(sounded_index, root_index)),
                None => sounded == root,
            };
            if !matches {
                continue;
            }

            let Some(octave) = tuning.octave_at(string, fret) else {
                continue;
            };
            positions.push(HighlightedPosition {
                string,
                fret,
                pitch_class: sounded,
                octave,
                color: color_of(sounded),
                wavelength_nm: wavelength_nm(sounded),
            });
        }
    }

    positions
}

/// A catalog, a tuning and a fret count: everything a query needs.
#[derive(Debug, Clone, Copy)]
pub struct Fretboard<'a> {
    catalog: &'a Catalog,
    tuning: &'a Tuning,
    frets: usize,
}

impl Default for Fretboard<'static> {
    fn default() -> Self {
        Fretboard::new(Catalog::standard(), Tuning::standard(), DEFAULT_FRETS)
    }
}

impl<'a> Fretboard<'a> {
    pub fn new(catalog: &'a Catalog, tuning: &'a Tuning, frets: usize) -> Self {
        Fretboard {
            catalog,
            tuning,
            frets,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn tuning(&self) -> &'a Tuning {
        self.tuning
    }

    pub fn frets(&self) -> usize {
        self.frets
    }

    /// Resolve a root name and chord/scale name and compute the highlights.
    ///
    /// # Errors
    /// Returns [`FretboardError::InvalidRoot`] if `root` is not a note name.
    pub fn highlights(&self, root: &str, chord: Option<&str>) -> Result<Highlights, FretboardError> {
        let root_pitch: PitchClass = root.parse()?;

        let requested = chord.filter(|name| !name.is_empty());
        let resolved = requested.and_then(|name| self.catalog.lookup(name).map(|set| (name, set)));

        let advisory = match (requested, resolved) {
            (Some(name), None) => {
                log::warn!("Chord '{}' not recognized. Showing note only.", name);
                Some(Advisory::UnrecognizedName {
                    name: name.to_string(),
                })
            }
            _ => None,
        };

        let positions = map_positions(
            root_pitch,
            resolved.map(|(_, set)| set),
            self.tuning,
            self.frets,
        );
        log::debug!(
            "{} {}: {} positions",
            root_pitch,
            resolved.map_or("(note)", |(name, _)| name),
            positions.len()
        );

        Ok(Highlights {
            root: root_pitch,
            root_name: root.to_string(),
            chord: resolved.map(|(name, _)| name.to_string()),
            positions,
            advisory,
        })
    }
}

impl Fretboard<'static> {
    /// Board for a configuration, using its embedded catalog variant and the
    /// standard tuning.
    pub fn from_config(config: &FretboardConfig) -> Self {
        Fretboard::new(config.catalog.catalog(), Tuning::standard(), config.frets)
    }
}
