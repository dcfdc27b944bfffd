//! Undo/Redo history of marks.
//!
//! A mark is committed the moment its gesture starts, not when it ends.
//! Strokes then grow in place while the gesture stays open, so undo always
//! removes the whole gesture in one step no matter how many points it
//! collected, and strokes and stamps share the same one-mark-per-step rule.
//!
//! Two stacks, both oldest first:
//! - `committed`: what is on the pad.
//! - `redoable`: what undo took off, most recently undone last.
//!
//! Committing a new mark empties `redoable`.

use stickerpad_core::{Mark, MarkId, Point, ToolState, build_mark};

/// Refers to the mark opened by `begin_mark`. Goes stale once that mark is
/// no longer the open tail of `committed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkHandle {
    id: MarkId,
}

#[derive(Debug, Clone)]
struct Entry {
    id: MarkId,
    mark: Mark,
}

#[derive(Debug, Default)]
pub struct HistoryStore {
    committed: Vec<Entry>,
    redoable: Vec<Entry>,
    /// Mark whose gesture is still open, if any.
    open: Option<MarkId>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mark from `tool` at `point`, commit it as the open mark, and
    /// drop the redo branch.
    pub fn begin_mark(&mut self, tool: &ToolState, point: Point) -> MarkHandle {
        let id = MarkId::fresh();
        let mark = build_mark(tool, point);
        log::debug!(
            "commit {} {id:?} at ({}, {}), dropping {} redoable",
            mark.kind_name(),
            point.x,
            point.y,
            self.redoable.len()
        );

        self.committed.push(Entry { id, mark });
        self.redoable.clear();
        self.open = Some(id);
        MarkHandle { id }
    }

    /// Append `point` to the open stroke.
    ///
    /// Ignored (returns `false`) when the handle is stale, the gesture was
    /// already ended, or the mark is a stamp.
    pub fn extend_mark(&mut self, handle: MarkHandle, point: Point) -> bool {
        if self.open != Some(handle.id) {
            return false;
        }
        match self.committed.last_mut() {
            Some(entry) if entry.id == handle.id => {
                let extended = entry.mark.extend(point);
                if extended {
                    log::trace!("extend {:?} to ({}, {})", handle.id, point.x, point.y);
                }
                extended
            }
            _ => false,
        }
    }

    /// Close the open gesture. The mark is already committed; this only
    /// clears the in-progress flag. Returns `false` if nothing was open.
    pub fn end_mark(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Move the newest committed mark onto the redo stack.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.committed.pop() else {
            return false;
        };
        log::debug!("undo {} {:?}", entry.mark.kind_name(), entry.id);
        self.open = None;
        self.redoable.push(entry);
        true
    }

    /// Move the most recently undone mark back onto `committed`.
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.redoable.pop() else {
            return false;
        };
        log::debug!("redo {} {:?}", entry.mark.kind_name(), entry.id);
        self.open = None;
        self.committed.push(entry);
        true
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        log::debug!(
            "clear {} committed, {} redoable",
            self.committed.len(),
            self.redoable.len()
        );
        self.committed.clear();
        self.redoable.clear();
        self.open = None;
    }

    /// Whether a gesture is currently open.
    pub fn is_action_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    /// Committed marks, oldest first.
    pub fn committed(&self) -> impl DoubleEndedIterator<Item = &Mark> + ExactSizeIterator {
        self.committed.iter().map(|e| &e.mark)
    }

    /// Undone marks, most recently undone last.
    pub fn redoable(&self) -> impl DoubleEndedIterator<Item = &Mark> + ExactSizeIterator {
        self.redoable.iter().map(|e| &e.mark)
    }

    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }

    pub fn redoable_len(&self) -> usize {
        self.redoable.len()
    }
}
