//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and pen events into the four pointer events the
//! gesture controller understands. Coordinates are surface-local.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved, pressed or not.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp,

    /// Pointer left the surface.
    PointerLeave,
}
