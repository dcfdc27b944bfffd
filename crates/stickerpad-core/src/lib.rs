pub mod catalogue;
pub mod config;
pub mod error;
pub mod factory;
pub mod mark;
pub mod preview;
pub mod tool;

pub use catalogue::{ToolCatalogue, ToolEntry, ToolKind};
pub use config::{CanvasConfig, PadConfig};
pub use error::ConfigError;
pub use factory::build_mark;
pub use mark::{FreehandStroke, Mark, MarkId, Point, StampMark};
pub use preview::ToolPreview;
pub use tool::{DEFAULT_PEN_WIDTH, MIN_PEN_WIDTH, ToolState};
