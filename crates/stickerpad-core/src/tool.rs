//! The active drawing mode.
//!
//! Exactly one `ToolState` exists per pad. It is changed only by tool
//! selection and read by the mark factory and the preview.

use serde::{Deserialize, Serialize};

/// Pen width used on startup.
pub const DEFAULT_PEN_WIDTH: f32 = 1.0;

/// Width used in place of a non-finite or non-positive pen request.
pub const MIN_PEN_WIDTH: f32 = 0.5;

/// What a pointer-down produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolState {
    Pen { width: f32 },
    Stamp { symbol: String },
}

impl Default for ToolState {
    fn default() -> Self {
        ToolState::Pen {
            width: DEFAULT_PEN_WIDTH,
        }
    }
}

impl ToolState {
    /// Switch to the pen. Always succeeds; a width that is not finite and
    /// positive is replaced by [`MIN_PEN_WIDTH`].
    pub fn select_pen(&mut self, width: f32) {
        *self = ToolState::Pen {
            width: sanitize_width(width),
        };
    }

    /// Switch to stamping `symbol`, trimmed. A blank symbol leaves the
    /// current tool in place and returns `false`.
    pub fn select_stamp(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            log::warn!("blank stamp symbol ignored, keeping {self:?}");
            return false;
        }
        *self = ToolState::Stamp {
            symbol: symbol.to_string(),
        };
        true
    }

    pub fn is_pen(&self) -> bool {
        matches!(self, ToolState::Pen { .. })
    }

    pub fn is_stamp(&self) -> bool {
        matches!(self, ToolState::Stamp { .. })
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        log::warn!("pen width {width} out of range, using {MIN_PEN_WIDTH}");
        MIN_PEN_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_thin_pen() {
        assert_eq!(
            ToolState::default(),
            ToolState::Pen {
                width: DEFAULT_PEN_WIDTH
            }
        );
    }

    #[test]
    fn selection_replaces_previous_mode() {
        let mut tool = ToolState::default();
        tool.select_stamp("★");
        assert!(tool.is_stamp());
        assert!(!tool.is_pen());

        tool.select_pen(4.0);
        assert_eq!(tool, ToolState::Pen { width: 4.0 });
    }

    #[test]
    fn bad_widths_are_clamped() {
        let mut tool = ToolState::default();
        for width in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            tool.select_pen(width);
            assert_eq!(tool, ToolState::Pen { width: MIN_PEN_WIDTH }, "width {width}");
        }
    }

    #[test]
    fn thin_positive_widths_are_kept() {
        let mut tool = ToolState::default();
        for width in [0.1, 0.3, MIN_PEN_WIDTH] {
            tool.select_pen(width);
            assert_eq!(tool, ToolState::Pen { width }, "width {width}");
        }
    }

    #[test]
    fn blank_stamp_keeps_current_tool() {
        let mut tool = ToolState::Pen { width: 3.0 };
        assert!(!tool.select_stamp(""));
        assert!(!tool.select_stamp("  \t"));
        assert_eq!(tool, ToolState::Pen { width: 3.0 });

        assert!(tool.select_stamp(" 🌸 "));
        assert_eq!(
            tool,
            ToolState::Stamp {
                symbol: "🌸".to_string()
            }
        );
    }
}
