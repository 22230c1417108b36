//! # Display List
//!
//! Draw instructions for a 2D canvas-like surface. The front end replays them
//! in order; no layout or music logic is needed on that side.
//!
//! ## Draw Order
//! 1. Strings (horizontal lines)
//! 2. Nut and frets (vertical lines)
//! 3. Fret numbers under the board
//! 4. String names left of the nut
//! 5. Position markers (inlays)
//! 6. Note dots, in the order of the highlight query
//!
//! Only coordinates, colors and strings appear in a [`DrawCommand`].
//!
//! ```rust
//! use fretboard::render::{display_list, DrawCommand};
//! use fretboard::{compute_highlights, Layout, Tuning};
//!
//! let highlights = compute_highlights("E", None).unwrap();
//! let commands = display_list(&Layout::default(), Tuning::standard(), 21, &highlights.positions);
//!
//! let dots = commands
//!     .iter()
//!     .filter(|c| matches!(c, DrawCommand::Circle { radius, .. } if *radius == 8.0))
//!     .count();
//! assert_eq!(dots, highlights.positions.len());
//! ```

use serde::Serialize;

use crate::color::{Color, BLACK, GRID_GREY, INLAY_BLUE};
use crate::geometry::{Layout, Point};
use crate::mapper::HighlightedPosition;
use crate::tuning::Tuning;

const STRING_WIDTH: f64 = 0.5;
const NUT_WIDTH: f64 = 4.0;
const FRET_WIDTH: f64 = 2.0;
const FRET_NUMBER_FONT: &str = "bold 10px Arial";
const STRING_NAME_FONT: &str = "bold 12px Arial";
/// Gap between the string names and the nut.
const STRING_NAME_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Text {
        at: Point,
        text: String,
        font: &'static str,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    },
}

/// Instructions for the empty board: strings, frets, labels, inlays.
pub fn fretboard_commands(layout: &Layout, tuning: &Tuning, frets: usize) -> Vec<DrawCommand> {
    let strings = tuning.string_count();
    let left = layout.fret_x(0);
    let right = layout.fret_x(frets);
    let top = layout.string_y(0);
    let bottom = top + layout.board_height(strings);
    let mut commands = Vec::new();

    for string in 0..strings {
        let y = layout.string_y(string);
        commands.push(DrawCommand::Line {
            from: Point::new(left, y),
            to: Point::new(right, y),
            color: GRID_GREY,
            width: STRING_WIDTH,
        });
    }

    for fret in 0..=frets {
        let x = layout.fret_x(fret);
        let (color, width) = if fret == 0 {
            (BLACK, NUT_WIDTH)
        } else {
            (GRID_GREY, FRET_WIDTH)
        };
        commands.push(DrawCommand::Line {
            from: Point::new(x, top),
            to: Point::new(x, bottom),
            color,
            width,
        });
    }

    let label_y = bottom + layout.string_spacing * 0.5;
    for fret in 0..=frets {
        commands.push(DrawCommand::Text {
            at: Point::new(layout.fret_x(fret), label_y),
            text: fret.to_string(),
            font: FRET_NUMBER_FONT,
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
            color: BLACK,
        });
    }

    for def in tuning.strings() {
        commands.push(DrawCommand::Text {
            at: Point::new(left - STRING_NAME_GAP, layout.string_y(def.index)),
            text: def.open.name().to_string(),
            font: STRING_NAME_FONT,
            align: TextAlign::Right,
            baseline: TextBaseline::Middle,
            color: BLACK,
        });
    }

    for center in layout.inlay_points(frets, strings) {
        commands.push(DrawCommand::Circle {
            center,
            radius: layout.inlay_radius,
            color: INLAY_BLUE,
        });
    }

    commands
}

/// One filled dot per highlighted position, in the pitch color.
pub fn note_commands(layout: &Layout, positions: &[HighlightedPosition]) -> Vec<DrawCommand> {
    positions
        .iter()
        .map(|p| DrawCommand::Circle {
            center: layout.position(p.string, p.fret),
            radius: layout.dot_radius,
            color: p.color,
        })
        .collect()
}

/// Board followed by note dots.
pub fn display_list(
    layout: &Layout,
    tuning: &Tuning,
    frets: usize,
    positions: &[HighlightedPosition],
) -> Vec<DrawCommand> {
    let mut commands = fretboard_commands(layout, tuning, frets);
    commands.extend(note_commands(layout, positions));
    commands
}

/// File name for saving a rendered board, derived from its title.
///
/// Keeps ASCII letters, digits, space, `_`, `.` and `-`; spaces become `_`.
///
/// ```rust
/// use fretboard::render::export_file_name;
///
/// assert_eq!(export_file_name("C Major 7th (maj7)"), "C_Major_7th_maj7.png");
/// assert_eq!(export_file_name("♭♭"), "fretboard.png");
/// ```
pub fn export_file_name(title: &str) -> String {
    let safe: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '.' | '-'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    let safe = safe.trim();
    if safe.is_empty() {
        "fretboard.png".to_string()
    } else {
        format!("{}.png", safe)
    }
}
