//! "Scene changed" notifications.
//!
//! Listeners are called synchronously, in subscription order, after a
//! change has been fully applied. Each call gets a read-only view of the
//! whole scene, so a listener never sees a half-applied mutation.

use crate::history::HistoryStore;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use stickerpad_core::{ToolPreview, ToolState};

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    /// Explicit redraw request (startup, resize).
    Refresh,
    MarkBegun,
    MarkExtended,
    MarkEnded,
    Undone,
    Redone,
    Cleared,
    HoverMoved,
    HoverCleared,
    ToolSelected,
}

/// Borrowed snapshot handed to listeners.
#[derive(Clone, Copy)]
pub struct SceneView<'a> {
    pub history: &'a HistoryStore,
    pub preview: &'a ToolPreview,
    pub tool: &'a ToolState,
}

impl<'a> SceneView<'a> {
    /// The preview to draw: only while no gesture is open.
    pub fn visible_preview(&self) -> Option<&'a ToolPreview> {
        if self.history.is_action_open() {
            None
        } else {
            Some(self.preview)
        }
    }
}

pub trait SceneListener {
    fn scene_changed(&mut self, change: SceneChange, scene: &SceneView<'_>);
}

/// Lets a caller keep its own handle on a listener after subscribing it.
impl<L: SceneListener + ?Sized> SceneListener for Rc<RefCell<L>> {
    fn scene_changed(&mut self, change: SceneChange, scene: &SceneView<'_>) {
        self.borrow_mut().scene_changed(change, scene);
    }
}

/// Ordered listener registry.
#[derive(Default)]
pub struct SceneBus {
    listeners: SmallVec<[Box<dyn SceneListener>; 2]>,
}

impl fmt::Debug for SceneBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneBus")
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl SceneBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn SceneListener>) {
        self.listeners.push(listener);
    }

    /// Deliver one notification to every listener.
    pub fn emit(&mut self, change: SceneChange, scene: &SceneView<'_>) {
        for listener in self.listeners.iter_mut() {
            listener.scene_changed(change, scene);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
