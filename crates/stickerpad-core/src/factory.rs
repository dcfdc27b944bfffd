//! Mark factory: turns the active tool and a pointer-down position into a
//! fresh mark.

use crate::mark::{FreehandStroke, Mark, Point, StampMark};
use crate::tool::ToolState;

/// Build the mark a pointer-down at `origin` produces under `tool`.
///
/// Width and symbol are copied out of the tool, so later tool changes never
/// reach back into a mark that already exists.
pub fn build_mark(tool: &ToolState, origin: Point) -> Mark {
    match tool {
        ToolState::Pen { width } => Mark::Freehand(FreehandStroke::new(origin, *width)),
        ToolState::Stamp { symbol } => Mark::Stamp(StampMark::new(origin, symbol.clone())),
    }
}
