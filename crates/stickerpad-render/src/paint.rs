//! Marks → surface draw calls.
//!
//! Every frame is a full redraw: clear to background, replay the committed
//! marks oldest first, then the hover preview on top. Nothing is patched
//! incrementally, so the picture is always a pure function of its inputs.

use crate::surface::Surface;
use stickerpad_core::{Mark, ToolPreview, ToolState};

/// Redraw the whole surface.
///
/// `preview` is `None` while a mark is in progress; callers pass the
/// preview only when no gesture is open.
pub fn render_all<'a, S, I>(surface: &mut S, committed: I, preview: Option<&ToolPreview>)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Mark>,
{
    surface.fill_background();

    let mut drawn = 0usize;
    for mark in committed {
        draw_mark(surface, mark);
        drawn += 1;
    }

    if let Some(preview) = preview {
        draw_preview(surface, preview);
    }
    log::trace!("RENDER {drawn} marks, preview={}", preview.is_some());
}

// ─── Mark painters ───────────────────────────────────────────────────────────

pub fn draw_mark<S: Surface + ?Sized>(surface: &mut S, mark: &Mark) {
    match mark {
        Mark::Freehand(stroke) => surface.draw_polyline(stroke.points(), stroke.width()),
        Mark::Stamp(stamp) => surface.draw_glyph(stamp.symbol(), stamp.anchor()),
    }
}

/// Draw the hover hint: a dot as wide as the pen, or the stamp's glyph.
/// Draws nothing when the pointer is not hovering.
pub fn draw_preview<S: Surface + ?Sized>(surface: &mut S, preview: &ToolPreview) {
    let Some((at, tool)) = preview.visible() else {
        return;
    };
    match tool {
        ToolState::Pen { width } => surface.draw_dot(at, *width),
        ToolState::Stamp { symbol } => surface.draw_glyph(symbol, at),
    }
}
