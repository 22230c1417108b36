//! Mapper result types
//!
//! These are handed to the renderer and the click handler as plain values and
//! are replaced wholesale on every query.

use serde::Serialize;

use crate::color::Color;
use crate::pitch::PitchClass;

/// A fretboard position whose note belongs to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedPosition {
    pub string: usize,
    pub fret: usize,
    pub pitch_class: PitchClass,
    pub octave: i32,
    pub color: Color,
    /// Nominal wavelength the color was picked at.
    pub wavelength_nm: u32,
}

/// Non-fatal notice attached to an otherwise successful query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Advisory {
    /// The chord/scale name is not in the catalog; single-note mode was used.
    UnrecognizedName { name: String },
}

/// Result of one highlight query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub root: PitchClass,
    /// The root as the caller spelled it, e.g. `"Bb"` for [`PitchClass::ASharp`].
    pub root_name: String,
    /// The chord or scale actually applied, `None` in single-note mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    pub positions: Vec<HighlightedPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}

impl Highlights {
    /// Display title, e.g. `"C Major"` or `"Bb"`, in the caller's spelling.
    pub fn title(&self) -> String {
        match &self.chord {
            Some(chord) => format!("{} {}", self.root_name, chord),
            None => self.root_name.clone(),
        }
    }

    pub fn is_single_note(&self) -> bool {
        self.chord.is_none()
    }

    /// Positions on one string, in fret order.
    pub fn on_string(&self, string: usize) -> impl Iterator<Item = &HighlightedPosition> {
        self.positions.iter().filter(move |p| p.string == string)
    }
}
