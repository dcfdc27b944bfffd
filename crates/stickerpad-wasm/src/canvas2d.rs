//! Canvas2D surface.
//!
//! Draws marks to an HTML `<canvas>` via `CanvasRenderingContext2d`.

use std::f64::consts::TAU;
use stickerpad_core::{CanvasConfig, Point};
use stickerpad_render::Surface;
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    background: String,
    ink: String,
    font: String,
}

impl Canvas2dSurface {
    pub fn new(ctx: CanvasRenderingContext2d, config: &CanvasConfig) -> Self {
        Self {
            ctx,
            width: f64::from(config.width),
            height: f64::from(config.height),
            background: config.background.clone(),
            ink: config.ink.clone(),
            font: format!("{}px sans-serif", config.glyph_px),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for Canvas2dSurface {
    fn fill_background(&mut self) {
        self.ctx.set_fill_style_str(&self.background);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_polyline(&mut self, points: &[Point], width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_stroke_style_str(&self.ink);
        ctx.set_line_width(f64::from(width));
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.begin_path();
        ctx.move_to(f64::from(first.x), f64::from(first.y));
        for p in rest {
            ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
        ctx.stroke();
        ctx.restore();
    }

    fn draw_glyph(&mut self, symbol: &str, at: Point) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_font(&self.font);
        ctx.set_fill_style_str(&self.ink);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(symbol, f64::from(at.x), f64::from(at.y));
        ctx.restore();
    }

    fn draw_dot(&mut self, center: Point, diameter: f32) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_fill_style_str(&self.ink);
        ctx.begin_path();
        let _ = ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(diameter) / 2.0,
            0.0,
            TAU,
        );
        ctx.fill();
        ctx.restore();
    }
}
