//! Wavelength-based note colors.
//!
//! Each pitch class gets a fixed color picked along the visible spectrum: C
//! (lowest) at 700nm red up to B at 425nm violet-blue, 25nm per semitone. The
//! table is indexed by the C-rooted standard index, so it does not depend on
//! the E-rooted sequence used for fret arithmetic.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::pitch::PitchClass;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", hex)))
    }
}

pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const GRID_GREY: Color = Color::rgb(0x99, 0x99, 0x99);
pub const INLAY_BLUE: Color = Color::rgb(0xad, 0xd8, 0xe6);
/// Used for a note dot when no spectrum color applies.
pub const FALLBACK_DOT: Color = Color::rgb(0x88, 0x88, 0x88);

/// Spectrum colors, C-rooted (C, C#, D, ..., B).
const WAVELENGTH_COLORS: [Color; 12] = [
    Color::rgb(0xff, 0x00, 0x00), // 700nm
    Color::rgb(0xff, 0x2a, 0x00), // 675nm
    Color::rgb(0xff, 0x55, 0x00), // 650nm
    Color::rgb(0xff, 0x80, 0x00), // 625nm
    Color::rgb(0xff, 0xab, 0x00), // 600nm
    Color::rgb(0xff, 0xd6, 0x00), // 575nm
    Color::rgb(0xea, 0xff, 0x00), // 550nm
    Color::rgb(0xb5, 0xff, 0x00), // 525nm
    Color::rgb(0x00, 0xff, 0x80), // 500nm
    Color::rgb(0x00, 0xff, 0xd6), // 475nm
    Color::rgb(0x00, 0xaa, 0xff), // 450nm
    Color::rgb(0x00, 0x55, 0xff), // 425nm
];

const LONGEST_WAVELENGTH_NM: u32 = 700;
const WAVELENGTH_STEP_NM: u32 = 25;

/// Spectrum color for a pitch class.
pub fn color_of(pitch: PitchClass) -> Color {
    WAVELENGTH_COLORS
        .get(pitch.standard_index())
        .copied()
        .unwrap_or(FALLBACK_DOT)
}

/// Nominal wavelength in nanometres the color of `pitch` was picked at.
pub fn wavelength_nm(pitch: PitchClass) -> u32 {
    LONGEST_WAVELENGTH_NM - WAVELENGTH_STEP_NM * pitch.standard_index() as u32
}
