//! Input abstraction for keyboard and mouse events.

use macroquad::prelude::*;
use sand_core::Brush;

/// Keys `1`..`6`, in [`Brush::ALL`] order.
const BRUSH_KEYS: [KeyCode; 6] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
];

/// The brush whose number key was pressed this frame, if any.
pub fn brush_pressed() -> Option<Brush> {
    BRUSH_KEYS
        .iter()
        .zip(Brush::ALL)
        .find(|(key, _)| is_key_pressed(**key))
        .map(|(_, brush)| brush)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Check if the dark-mode toggle was pressed this frame.
pub fn dark_mode_pressed() -> bool {
    is_key_pressed(KeyCode::D)
}

/// Check if the clear key was pressed this frame.
pub fn clear_pressed() -> bool {
    is_key_pressed(KeyCode::C)
}

/// Pen size change requested this frame: `+1`, `-1`, or `0`.
pub fn pen_delta() -> i32 {
    if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
        1
    } else if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
        -1
    } else {
        0
    }
}

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Screen x.
    pub x: f32,
    /// Screen y.
    pub y: f32,
    /// Left button held.
    pub down: bool,
    /// Left button went down this frame.
    pub pressed: bool,
    /// Right button went down this frame.
    pub menu: bool,
}

impl Pointer {
    /// Read the current mouse state.
    pub fn sample() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            down: is_mouse_button_down(MouseButton::Left),
            pressed: is_mouse_button_pressed(MouseButton::Left),
            menu: is_mouse_button_pressed(MouseButton::Right),
        }
    }
}
