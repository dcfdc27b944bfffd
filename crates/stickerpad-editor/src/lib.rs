//! Interactive layer of Stickerpad: undoable history, the pointer gesture
//! state machine, and redraw-on-change notifications.

pub mod gesture;
pub mod history;
pub mod input;
pub mod pad;
pub mod pipeline;
pub mod scene;
pub mod shortcuts;

pub use gesture::{GestureState, InputController};
pub use history::{HistoryStore, MarkHandle};
pub use input::InputEvent;
pub use pad::Sketchpad;
pub use pipeline::RenderPipeline;
pub use scene::{SceneBus, SceneChange, SceneListener, SceneView};
pub use shortcuts::{ShortcutAction, ShortcutMap};
