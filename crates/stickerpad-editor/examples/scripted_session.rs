//! Replay a short drawing session and print what the surface was told.
//!
//! ```text
//! RUST_LOG=debug cargo run -p stickerpad-editor --example scripted_session [config.json]
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use stickerpad_core::PadConfig;
use stickerpad_editor::{InputEvent, RenderPipeline, Sketchpad};
use stickerpad_render::{DrawCall, RecordingSurface};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => PadConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PadConfig::default(),
    };
    println!("{}", config.title);

    let pipeline = Rc::new(RefCell::new(RenderPipeline::new(RecordingSurface::new())));
    let mut pad = Sketchpad::from_config(&config);
    pad.subscribe(Rc::clone(&pipeline));
    pad.refresh();

    // A zig-zag with the first tool, a stamp with the last, then undo/redo.
    let zigzag = [(10.0, 10.0), (30.0, 40.0), (50.0, 10.0), (70.0, 40.0)];
    pad.select_tool_at(0);
    pad.handle_input(&InputEvent::PointerMove { x: 5.0, y: 5.0 });
    for (i, &(x, y)) in zigzag.iter().enumerate() {
        let event = if i == 0 {
            InputEvent::PointerDown { x, y }
        } else {
            InputEvent::PointerMove { x, y }
        };
        pad.handle_input(&event);
    }
    pad.handle_input(&InputEvent::PointerUp);

    pad.select_tool_at(pad.catalogue().len() - 1);
    pad.pointer_down(120.0, 60.0);
    pad.pointer_up();
    pad.undo();
    pad.redo();
    pad.pointer_move(200.0, 200.0);

    let pipeline = pipeline.borrow();
    println!(
        "{} marks, {} frames rendered; last frame:",
        pad.history().committed_len(),
        pipeline.renders()
    );
    for call in pipeline.surface().frame() {
        match call {
            DrawCall::FillBackground => println!("  fill {}", config.canvas.background),
            DrawCall::Polyline { points, width } => {
                println!("  polyline w={width} through {} points", points.len())
            }
            DrawCall::Glyph { symbol, at } => println!("  glyph {symbol} at ({}, {})", at.x, at.y),
            DrawCall::Dot { center, diameter } => {
                println!("  dot d={diameter} at ({}, {})", center.x, center.y)
            }
        }
    }
    Ok(())
}
