//! The pad: one history, one tool, one preview, one gesture controller.
//!
//! Every entry point that changes what is on screen goes through here, so
//! each call announces at most one [`SceneChange`], after the change is
//! complete. Calls that change nothing announce nothing.

use crate::gesture::{GestureState, InputController};
use crate::history::HistoryStore;
use crate::input::InputEvent;
use crate::scene::{SceneBus, SceneChange, SceneListener, SceneView};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use stickerpad_core::{ConfigError, PadConfig, ToolCatalogue, ToolPreview, ToolState};

#[derive(Debug)]
pub struct Sketchpad {
    history: HistoryStore,
    tool: ToolState,
    preview: ToolPreview,
    input: InputController,
    catalogue: ToolCatalogue,
    /// Catalogue label matching `tool`, for UI highlighting.
    active: Option<String>,
    bus: SceneBus,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(ToolCatalogue::default())
    }
}

impl Sketchpad {
    /// Start with the first catalogue tool selected.
    pub fn new(catalogue: ToolCatalogue) -> Self {
        let (tool, active) = match catalogue.get(0).map(|e| (e.tool_state(), &e.label)) {
            Some((Ok(tool), label)) => (tool, Some(label.clone())),
            _ => (ToolState::default(), None),
        };
        Self {
            history: HistoryStore::new(),
            tool,
            preview: ToolPreview::new(),
            input: InputController::new(),
            catalogue,
            active,
            bus: SceneBus::new(),
        }
    }

    pub fn from_config(config: &PadConfig) -> Self {
        Self::new(config.tools.clone())
    }

    /// Register a listener. It hears about changes made after this call;
    /// use [`Sketchpad::refresh`] to bring it up to date.
    pub fn subscribe<L: SceneListener + 'static>(&mut self, listener: L) {
        self.bus.subscribe(Box::new(listener));
    }

    /// Announce the current scene unchanged (startup, resize).
    pub fn refresh(&mut self) {
        self.emit(SceneChange::Refresh);
    }

    // ─── Accessors ───────────────────────────────────────────────────────────

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn preview(&self) -> &ToolPreview {
        &self.preview
    }

    pub fn catalogue(&self) -> &ToolCatalogue {
        &self.catalogue
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn gesture(&self) -> GestureState {
        self.input.state()
    }

    pub fn listener_count(&self) -> usize {
        self.bus.len()
    }

    pub fn scene(&self) -> SceneView<'_> {
        SceneView {
            history: &self.history,
            preview: &self.preview,
            tool: &self.tool,
        }
    }

    // ─── Tool selection ──────────────────────────────────────────────────────

    pub fn select_pen(&mut self, width: f32) {
        self.tool.select_pen(width);
        self.tool_changed(None);
    }

    /// Blank symbols change nothing and announce nothing.
    pub fn select_stamp(&mut self, symbol: &str) -> bool {
        if !self.tool.select_stamp(symbol) {
            return false;
        }
        self.tool_changed(None);
        true
    }

    /// Select a catalogue tool by label. Unknown labels change nothing.
    pub fn select_tool(&mut self, label: &str) -> bool {
        let Some(entry) = self.catalogue.find(label) else {
            log::warn!("no tool labelled {label:?}");
            return false;
        };
        let tool = entry.tool_state();
        self.apply_entry(tool, label.to_string())
    }

    /// Select the catalogue tool at `index`.
    pub fn select_tool_at(&mut self, index: usize) -> bool {
        let Some(entry) = self.catalogue.get(index) else {
            log::warn!("no tool at index {index}");
            return false;
        };
        let (tool, label) = (entry.tool_state(), entry.label.clone());
        self.apply_entry(tool, label)
    }

    /// Add a stamp for `symbol` to the catalogue and select it.
    /// Returns the label it was filed under.
    pub fn add_custom_stamp(&mut self, symbol: &str) -> Result<String, ConfigError> {
        let label = self.catalogue.add_stamp(symbol)?.label.clone();
        self.select_tool(&label);
        Ok(label)
    }

    fn apply_entry(&mut self, tool: Result<ToolState, ConfigError>, label: String) -> bool {
        match tool {
            Ok(tool) => {
                self.tool = tool;
                self.tool_changed(Some(label));
                true
            }
            Err(err) => {
                log::warn!("tool {label:?} rejected: {err}");
                false
            }
        }
    }

    /// `label` is the catalogue entry chosen, or `None` for a direct
    /// pen/stamp selection, which highlights a matching entry if any.
    fn tool_changed(&mut self, label: Option<String>) {
        self.active = label.or_else(|| {
            self.catalogue
                .entries()
                .iter()
                .find(|e| e.tool_state().ok().as_ref() == Some(&self.tool))
                .map(|e| e.label.clone())
        });
        log::info!("tool {:?} ({:?})", self.tool, self.active);
        self.preview.refresh_tool(&self.tool);
        self.emit(SceneChange::ToolSelected);
    }

    // ─── History controls ────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.emit(SceneChange::Undone);
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.emit(SceneChange::Redone);
        }
        changed
    }

    /// Wipe both stacks. Always announces, even on an empty pad.
    pub fn clear(&mut self) {
        self.history.clear();
        self.emit(SceneChange::Cleared);
    }

    // ─── Pointer input ───────────────────────────────────────────────────────

    /// Route one pointer event through the gesture controller.
    /// Returns `true` if it changed the scene.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let change = self
            .input
            .handle(event, &mut self.history, &mut self.preview, &self.tool);
        match change {
            Some(change) => {
                self.emit(change);
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.handle_input(&InputEvent::PointerDown { x, y })
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.handle_input(&InputEvent::PointerMove { x, y })
    }

    pub fn pointer_up(&mut self) -> bool {
        self.handle_input(&InputEvent::PointerUp)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.handle_input(&InputEvent::PointerLeave)
    }

    // ─── Keyboard ────────────────────────────────────────────────────────────

    /// Returns `true` if the action changed the scene.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::Clear => {
                self.clear();
                true
            }
            ShortcutAction::SelectTool(index) => self.select_tool_at(index),
        }
    }

    /// Resolve and apply a key event. Returns the action it mapped to, if
    /// any, so the host knows to suppress the browser default.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let action = ShortcutMap::resolve(key, ctrl, shift, alt, meta)?;
        self.apply_shortcut(action);
        Some(action)
    }

    fn emit(&mut self, change: SceneChange) {
        let scene = SceneView {
            history: &self.history,
            preview: &self.preview,
            tool: &self.tool,
        };
        self.bus.emit(change, &scene);
    }
}
