//! Pixel layout of the fretboard.
//!
//! Frets are equally spaced columns and strings equally spaced rows, measured
//! from an `(offset_x, offset_y)` origin at the nut of the top string.
//! Nothing here knows about notes; it only turns indices into coordinates.

use serde::{Deserialize, Serialize};

use crate::mapper::HighlightedPosition;

/// Frets that carry a position marker. Multiples of 12 get a double dot.
pub const INLAY_FRETS: [usize; 11] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24, 27];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Spacing constants, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Layout {
    pub fret_spacing: f64,
    pub string_spacing: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub dot_radius: f64,
    pub inlay_radius: f64,
    /// Extra room under the board for fret numbers.
    pub label_margin: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            fret_spacing: 40.0,
            string_spacing: 25.0,
            offset_x: 40.0,
            offset_y: 20.0,
            dot_radius: 8.0,
            inlay_radius: 6.0,
            label_margin: 60.0,
        }
    }
}

impl Layout {
    pub fn fret_x(&self, fret: usize) -> f64 {
        self.offset_x + fret as f64 * self.fret_spacing
    }

    pub fn string_y(&self, string: usize) -> f64 {
        self.offset_y + string as f64 * self.string_spacing
    }

    /// Center of the note dot for a string and fret. Dots sit on the fret line.
    pub fn position(&self, string: usize, fret: usize) -> Point {
        Point::new(self.fret_x(fret), self.string_y(string))
    }

    pub fn board_width(&self, frets: usize) -> f64 {
        frets as f64 * self.fret_spacing
    }

    pub fn board_height(&self, strings: usize) -> f64 {
        strings.saturating_sub(1) as f64 * self.string_spacing
    }

    /// Canvas `(width, height)` needed for the whole board and its labels.
    pub fn canvas_size(&self, frets: usize, strings: usize) -> (f64, f64) {
        (
            self.offset_x * 2.0 + self.board_width(frets),
            self.offset_y * 2.0 + self.board_height(strings) + self.label_margin,
        )
    }

    /// Centers of the position markers, between the marked fret and the one
    /// before it, vertically centered on the board.
    pub fn inlay_points(&self, frets: usize, strings: usize) -> Vec<Point> {
        let y_mid = self.offset_y + self.board_height(strings) / 2.0;
        let mut points = Vec::new();

        for fret in INLAY_FRETS.iter().copied().filter(|&f| f <= frets) {
            let x = (self.fret_x(fret - 1) + self.fret_x(fret)) / 2.0;
            if fret % 12 == 0 {
                let spread = self.string_spacing * 1.5;
                points.push(Point::new(x, y_mid - spread));
                points.push(Point::new(x, y_mid + spread));
            } else {
                points.push(Point::new(x, y_mid));
            }
        }

        points
    }

    /// Whether `(x, y)` lies inside (or on) the dot drawn at `center`.
    pub fn hits_dot(&self, center: Point, x: f64, y: f64) -> bool {
        let dx = x - center.x;
        let dy = y - center.y;
        dx * dx + dy * dy <= self.dot_radius * self.dot_radius
    }
}

/// First highlighted position whose dot contains `(x, y)`.
pub fn find_position_at<'a>(
    positions: &'a [HighlightedPosition],
    layout: &Layout,
    x: f64,
    y: f64,
) -> Option<&'a HighlightedPosition> {
    positions
        .iter()
        .find(|p| layout.hits_dot(layout.position(p.string, p.fret), x, y))
}
