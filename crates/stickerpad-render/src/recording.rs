//! A surface that records draw calls instead of rasterizing them.

use crate::surface::Surface;
use stickerpad_core::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillBackground,
    Polyline { points: Vec<Point>, width: f32 },
    Glyph { symbol: String, at: Point },
    Dot { center: Point, diameter: f32 },
}

/// Keeps every call since the last frame boundary.
///
/// `fill_background` starts a new frame, so `frame()` always holds exactly
/// what the most recent full redraw produced.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frame: Vec<DrawCall>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the latest frame.
    pub fn frame(&self) -> &[DrawCall] {
        &self.frame
    }

    /// Number of frames started so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn fill_background(&mut self) {
        self.frame.clear();
        self.frames += 1;
        self.frame.push(DrawCall::FillBackground);
    }

    fn draw_polyline(&mut self, points: &[Point], width: f32) {
        self.frame.push(DrawCall::Polyline {
            points: points.to_vec(),
            width,
        });
    }

    fn draw_glyph(&mut self, symbol: &str, at: Point) {
        self.frame.push(DrawCall::Glyph {
            symbol: symbol.to_string(),
            at,
        });
    }

    fn draw_dot(&mut self, center: Point, diameter: f32) {
        self.frame.push(DrawCall::Dot { center, diameter });
    }
}
