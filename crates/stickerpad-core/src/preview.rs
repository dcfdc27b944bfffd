//! Hover preview of the next action.
//!
//! The preview is transient: it is never part of history and undo/redo
//! never touch it. It remembers where the pointer last hovered and which
//! tool was active at that moment.

use crate::mark::Point;
use crate::tool::ToolState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolPreview {
    position: Option<Point>,
    tool: Option<ToolState>,
}

impl ToolPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hover at `point` with a snapshot of `tool`.
    pub fn update_hover(&mut self, point: Point, tool: &ToolState) {
        self.position = Some(point);
        self.tool = Some(tool.clone());
    }

    /// Forget the hover position (pointer left the surface, or a drag began).
    /// Returns `true` if a position was actually cleared.
    pub fn clear_hover(&mut self) -> bool {
        self.position.take().is_some()
    }

    /// Re-snapshot `tool` while keeping the hover position, so a tool change
    /// shows up before the next pointer move. Returns `true` if the preview
    /// is visible and therefore changed on screen.
    pub fn refresh_tool(&mut self, tool: &ToolState) -> bool {
        self.tool = Some(tool.clone());
        self.position.is_some()
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn tool(&self) -> Option<&ToolState> {
        self.tool.as_ref()
    }

    /// Position and tool snapshot, if there is anything to draw.
    pub fn visible(&self) -> Option<(Point, &ToolState)> {
        match (self.position, self.tool.as_ref()) {
            (Some(point), Some(tool)) => Some((point, tool)),
            _ => None,
        }
    }
}
