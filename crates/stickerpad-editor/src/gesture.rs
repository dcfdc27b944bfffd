//! Gesture state machine.
//!
//! Turns pointer events into mark lifecycle calls on the history and hover
//! updates on the preview.
//!
//! | from              | event        | to       | effect                         |
//! |-------------------|--------------|----------|--------------------------------|
//! | Idle / Hovering   | down         | Dragging | clear hover, `begin_mark`      |
//! | Dragging          | move         | Dragging | `extend_mark`                  |
//! | Dragging          | up / leave   | Idle     | `end_mark`                     |
//! | Idle / Hovering   | move         | Hovering | `update_hover`                 |
//! | Hovering          | leave        | Idle     | `clear_hover`                  |
//!
//! Leaving mid-drag keeps the mark as drawn so far; it is not discarded.

use crate::history::{HistoryStore, MarkHandle};
use crate::input::InputEvent;
use crate::scene::SceneChange;
use stickerpad_core::{Point, ToolPreview, ToolState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Hovering,
    Dragging(MarkHandle),
}

#[derive(Debug, Default)]
pub struct InputController {
    state: GestureState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Feed one event. Returns the change to announce, or `None` if the
    /// event left history and preview untouched.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        history: &mut HistoryStore,
        preview: &mut ToolPreview,
        tool: &ToolState,
    ) -> Option<SceneChange> {
        match (*event, self.state) {
            (InputEvent::PointerDown { x, y }, state) => {
                if let GestureState::Dragging(_) = state {
                    // Missed the release of the previous gesture.
                    history.end_mark();
                }
                preview.clear_hover();
                let handle = history.begin_mark(tool, Point::new(x, y));
                self.state = GestureState::Dragging(handle);
                Some(SceneChange::MarkBegun)
            }
            (InputEvent::PointerMove { x, y }, GestureState::Dragging(handle)) => history
                .extend_mark(handle, Point::new(x, y))
                .then_some(SceneChange::MarkExtended),
            (InputEvent::PointerMove { x, y }, _) => {
                preview.update_hover(Point::new(x, y), tool);
                self.state = GestureState::Hovering;
                Some(SceneChange::HoverMoved)
            }
            (InputEvent::PointerUp | InputEvent::PointerLeave, GestureState::Dragging(_)) => {
                self.state = GestureState::Idle;
                history.end_mark().then_some(SceneChange::MarkEnded)
            }
            (InputEvent::PointerLeave, GestureState::Hovering) => {
                self.state = GestureState::Idle;
                preview
                    .clear_hover()
                    .then_some(SceneChange::HoverCleared)
            }
            (InputEvent::PointerUp | InputEvent::PointerLeave, _) => None,
        }
    }
}
