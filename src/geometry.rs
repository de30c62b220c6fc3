//! Mapping from abstract layout units to output pixels
//!
//! The layout engine works in grid units; the document is in pixels. The two
//! axes scale by fixed constants whose ratio approximates a monospace glyph
//! cell, so one horizontal unit is one text column and one vertical unit is
//! one text row. The mapping is purely linear; fractional pixel coordinates
//! are valid output.

use crate::graph::Point;

/// Vertical pixels per layout unit (one text row)
pub const ROW_HEIGHT: f64 = 15.0;

/// Width-to-height ratio of a monospace glyph cell
pub const GLYPH_RATIO: f64 = 0.48;

/// Horizontal pixels per layout unit (one text column)
pub const ROW_WIDTH: f64 = ROW_HEIGHT * GLYPH_RATIO;

/// Map a horizontal coordinate or width to pixels
pub fn px_x(units: f64) -> f64 {
    units * ROW_WIDTH
}

/// Map a vertical coordinate or height to pixels
pub fn px_y(units: f64) -> f64 {
    units * ROW_HEIGHT
}

/// Map a layout point to pixel coordinates
pub fn map_point(p: Point) -> (f64, f64) {
    (px_x(p.x), px_y(p.y))
}
