//! # Fretboard
//!
//! Maps a root note plus an optional chord or scale onto a six-string guitar
//! neck, colors each note by a wavelength-based palette, and resolves clicks on
//! note dots to playable pitches.
//!
//! ## Pipeline
//! 1. Look up the chord/scale name in the [`Catalog`]
//! 2. Map root + intervals onto the [`Tuning`] ([`mapper`])
//! 3. Lay out positions in pixels ([`geometry`]) and emit draw instructions ([`render`])
//! 4. Hit-test clicks against the same positions and build a [`PlaybackRequest`]
//!
//! ```rust
//! use fretboard::{compute_highlights, find_position_at, Layout, PitchClass};
//!
//! let highlights = compute_highlights("C", Some("Major"))?;
//! let layout = Layout::default();
//!
//! // open high E string sits at the nut of the top string
//! let hit = find_position_at(&highlights.positions, &layout, 40.0, 20.0).unwrap();
//! assert_eq!(hit.pitch_class, PitchClass::E);
//! assert_eq!(hit.octave, 6);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod pitch;
pub mod playback;
pub mod render;
pub mod tuning;

pub use catalog::{Catalog, CatalogEntry, CatalogOption, CatalogVariant, IntervalSet};
pub use color::{color_of, Color};
pub use config::FretboardConfig;
pub use error::*;
pub use geometry::{find_position_at, Layout, Point};
pub use mapper::{map_positions, Advisory, Fretboard, HighlightedPosition, Highlights};
pub use pitch::{PitchClass, NOTE_SEQUENCE};
pub use playback::{AudioSink, PlaybackRequest};
pub use render::{display_list, DrawCommand};
pub use tuning::{StringDef, Tuning};

/// Highlights on the standard 21-fret board with the standard catalog.
///
/// # Errors
/// Returns [`FretboardError::InvalidRoot`] if `root` is not a note name. An
/// unknown chord name is not an error; see [`Highlights::advisory`].
pub fn compute_highlights(root: &str, chord: Option<&str>) -> Result<Highlights, FretboardError> {
    Fretboard::default().highlights(root, chord)
}

/// Resolve a click to a playback request and send it to `sink`.
///
/// Returns the request, or `None` when no dot is under the pointer.
pub fn play_at(
    highlights: &Highlights,
    layout: &Layout,
    x: f64,
    y: f64,
    duration: f64,
    sink: &mut dyn AudioSink,
) -> Option<PlaybackRequest> {
    let position = find_position_at(&highlights.positions, layout, x, y)?;
    let request = PlaybackRequest::for_position(position, duration);
    sink.play(&request);
    Some(request)
}
