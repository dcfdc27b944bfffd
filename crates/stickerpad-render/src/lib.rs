//! Full-redraw painter for Stickerpad.
//!
//! Backends implement [`Surface`]; [`render_all`] rebuilds a frame from the
//! committed marks and the hover preview.

pub mod paint;
pub mod recording;
pub mod surface;

pub use paint::{draw_mark, draw_preview, render_all};
pub use recording::{DrawCall, RecordingSurface};
pub use surface::Surface;
