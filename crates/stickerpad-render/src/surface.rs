//! The drawing sink.
//!
//! A `Surface` is a 2D raster target that knows how to fill itself, stroke
//! a polyline, draw a filled dot, and place a glyph. Only the painter in
//! this crate calls into it.

use stickerpad_core::Point;

pub trait Surface {
    /// Fill the whole surface with the background color.
    fn fill_background(&mut self);

    /// Stroke a connected polyline through `points` with `width`.
    /// A single point draws nothing visible on most backends.
    fn draw_polyline(&mut self, points: &[Point], width: f32);

    /// Draw `symbol` centered on `at`.
    fn draw_glyph(&mut self, symbol: &str, at: Point);

    /// Fill a circle of `diameter` centered on `center`.
    fn draw_dot(&mut self, center: Point, diameter: f32);
}
