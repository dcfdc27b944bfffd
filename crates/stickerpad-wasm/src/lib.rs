//! WASM bridge for Stickerpad: exposes the pad to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards pointer,
//! key, and button events here; every change repaints the canvas before the
//! call returns.

mod canvas2d;

use canvas2d::Canvas2dSurface;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use stickerpad_core::{PadConfig, ToolEntry};
use stickerpad_editor::{RenderPipeline, ShortcutAction, ShortcutMap, Sketchpad};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The JS-facing pad controller.
///
/// Owns the sketchpad and the pipeline that paints it onto the canvas.
#[wasm_bindgen]
pub struct StickerpadCanvas {
    pad: Sketchpad,
    pipeline: Rc<RefCell<RenderPipeline<Canvas2dSurface>>>,
    title: String,
}

#[wasm_bindgen]
impl StickerpadCanvas {
    /// Create a pad drawing into `ctx`. `config_json` is a `PadConfig`
    /// document; an empty string selects the built-in defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d, config_json: &str) -> Result<StickerpadCanvas, JsValue> {
        init_logging();
        console_error_panic_hook_setup();

        let config = load_config(config_json).map_err(|e| JsValue::from_str(&e))?;
        let surface = Canvas2dSurface::new(ctx, &config.canvas);
        let pipeline = Rc::new(RefCell::new(RenderPipeline::new(surface)));

        let mut pad = Sketchpad::from_config(&config);
        pad.subscribe(Rc::clone(&pipeline));
        pad.refresh();
        log::info!("{} ready with {} tools", config.title, pad.catalogue().len());

        Ok(Self {
            pad,
            pipeline,
            title: config.title,
        })
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    /// Repaint without changing anything.
    pub fn render(&mut self) {
        self.pad.refresh();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.pipeline.borrow_mut().surface_mut().resize(width, height);
        self.pad.refresh();
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Returns `true` if the scene changed.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.pad.pointer_down(x, y)
    }

    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.pad.pointer_move(x, y)
    }

    pub fn handle_pointer_up(&mut self) -> bool {
        self.pad.pointer_up()
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.pad.pointer_leave()
    }

    // ─── Tools ───────────────────────────────────────────────────────────

    /// Select a catalogue tool by its label. Returns `false` for unknown
    /// labels.
    pub fn select_tool(&mut self, label: &str) -> bool {
        self.pad.select_tool(label)
    }

    pub fn select_pen(&mut self, width: f32) {
        self.pad.select_pen(width);
    }

    /// Returns `false` if `symbol` is blank; the tool is then unchanged.
    pub fn select_stamp(&mut self, symbol: &str) -> bool {
        self.pad.select_stamp(symbol)
    }

    /// Add and select a custom stamp. Returns its label, or an empty string
    /// if the symbol was rejected.
    pub fn add_custom_stamp(&mut self, symbol: &str) -> String {
        match self.pad.add_custom_stamp(symbol) {
            Ok(label) => label,
            Err(e) => {
                log::warn!("custom stamp rejected: {e}");
                String::new()
            }
        }
    }

    /// Label of the highlighted tool, or an empty string.
    pub fn active_tool(&self) -> String {
        self.pad.active_label().unwrap_or_default().to_string()
    }

    /// Catalogue as JSON: `{"active":"thin","tools":[{label, kind, ...}]}`.
    pub fn tools_json(&self) -> String {
        tools_json(&self.pad)
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.pad.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.pad.redo()
    }

    pub fn clear(&mut self) {
        self.pad.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.pad.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.pad.history().can_redo()
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>", "tool":"<label>"}`
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, alt, meta) else {
            return key_outcome_json(false, None, self.pad.active_label());
        };
        let changed = self.pad.apply_shortcut(action);
        key_outcome_json(changed, Some(action), self.pad.active_label())
    }
}

fn load_config(json: &str) -> Result<PadConfig, String> {
    if json.trim().is_empty() {
        return Ok(PadConfig::default());
    }
    PadConfig::from_json(json).map_err(|e| format!("invalid pad config: {e}"))
}

fn action_to_name(action: Option<ShortcutAction>) -> &'static str {
    match action {
        None => "none",
        Some(ShortcutAction::Undo) => "undo",
        Some(ShortcutAction::Redo) => "redo",
        Some(ShortcutAction::Clear) => "clear",
        Some(ShortcutAction::SelectTool(_)) => "select_tool",
    }
}

#[derive(Serialize)]
struct KeyOutcome<'a> {
    changed: bool,
    action: &'static str,
    tool: &'a str,
}

fn key_outcome_json(changed: bool, action: Option<ShortcutAction>, tool: Option<&str>) -> String {
    let outcome = KeyOutcome {
        changed,
        action: action_to_name(action),
        tool: tool.unwrap_or_default(),
    };
    serde_json::to_string(&outcome)
        .unwrap_or_else(|e| format!(r#"{{"changed":{changed},"error":"{e}"}}"#))
}

#[derive(Serialize)]
struct ToolsView<'a> {
    active: Option<&'a str>,
    tools: &'a [ToolEntry],
}

fn tools_json(pad: &Sketchpad) -> String {
    let view = ToolsView {
        active: pad.active_label(),
        tools: pad.catalogue().entries(),
    };
    serde_json::to_string(&view).unwrap_or_else(|e| format!(r#"{{"error":"{e}"}}"#))
}

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            if console_log::init_with_level(log::Level::Info).is_err() {
                web_sys::console::warn_1(&"Stickerpad: logger already set".into());
            }
        });
    }
}

/// Set up panic hook for better error messages in console.
fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Stickerpad WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_config("  ").unwrap();
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn bad_config_reports_reason() {
        let err = load_config(r#"{"tools": []}"#).unwrap_err();
        assert!(err.starts_with("invalid pad config"), "{err}");
    }

    #[test]
    fn key_outcome_shape() {
        assert_eq!(
            key_outcome_json(true, Some(ShortcutAction::Undo), Some("thin")),
            r#"{"changed":true,"action":"undo","tool":"thin"}"#
        );
        assert_eq!(
            key_outcome_json(false, None, None),
            r#"{"changed":false,"action":"none","tool":""}"#
        );
    }

    #[test]
    fn tools_json_lists_catalogue_and_active() {
        let mut pad = Sketchpad::default();
        pad.select_tool("🍪");
        let value: serde_json::Value = serde_json::from_str(&tools_json(&pad)).unwrap();

        assert_eq!(value["active"], "🍪");
        assert_eq!(value["tools"].as_array().unwrap().len(), 5);
        assert_eq!(value["tools"][0]["label"], "thin");
        assert_eq!(value["tools"][0]["kind"], "pen");
        assert_eq!(value["tools"][3]["symbol"], "🍪");
    }
}
