//! Redraw-on-change listener.

use crate::scene::{SceneChange, SceneListener, SceneView};
use stickerpad_render::{Surface, render_all};

/// Owns a surface and repaints all of it on every notification.
#[derive(Debug)]
pub struct RenderPipeline<S: Surface> {
    surface: S,
    renders: usize,
}

impl<S: Surface> RenderPipeline<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            renders: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Full redraw from `scene`.
    pub fn render(&mut self, scene: &SceneView<'_>) {
        render_all(
            &mut self.surface,
            scene.history.committed(),
            scene.visible_preview(),
        );
        self.renders += 1;
    }

    /// Number of frames drawn so far.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl<S: Surface> SceneListener for RenderPipeline<S> {
    fn scene_changed(&mut self, change: SceneChange, scene: &SceneView<'_>) {
        log::trace!("render after {change:?}");
        self.render(scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryStore;
    use pretty_assertions::assert_eq;
    use stickerpad_core::{Point, ToolPreview, ToolState};
    use stickerpad_render::{DrawCall, RecordingSurface};

    #[test]
    fn preview_hidden_while_gesture_open() {
        let tool = ToolState::Stamp {
            symbol: "★".to_string(),
        };
        let mut history = HistoryStore::new();
        let mut preview = ToolPreview::new();
        preview.update_hover(Point::new(1.0, 1.0), &tool);
        history.begin_mark(&tool, Point::new(2.0, 2.0));

        let mut pipeline = RenderPipeline::new(RecordingSurface::new());
        let scene = SceneView {
            history: &history,
            preview: &preview,
            tool: &tool,
        };
        pipeline.scene_changed(SceneChange::MarkBegun, &scene);

        assert_eq!(
            pipeline.surface().frame(),
            &[
                DrawCall::FillBackground,
                DrawCall::Glyph {
                    symbol: "★".to_string(),
                    at: Point::new(2.0, 2.0),
                },
            ]
        );

        history.end_mark();
        let scene = SceneView {
            history: &history,
            preview: &preview,
            tool: &tool,
        };
        pipeline.scene_changed(SceneChange::MarkEnded, &scene);
        assert_eq!(pipeline.surface().frame().len(), 3);
        assert_eq!(pipeline.renders(), 2);
    }
}
