//! Visual theme: palette, layout constants, and color conversion.

use macroquad::prelude::*;

/// Screen pixels per grid cell.
pub const PIXEL_SIZE: u32 = 4;

/// Font size for overlay text.
pub const TEXT_SIZE: f32 = 16.0;

/// UI palette for menus and overlays.
pub mod palette {
    use macroquad::prelude::Color;

    /// Black for text shadows.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Light-mode canvas background (#ADD8E6).
    pub const LIGHT_BLUE: Color = Color::new(0.678, 0.847, 0.902, 1.0);
    /// Dark-mode canvas background.
    pub const NIGHT: Color = Color::new(0.07, 0.07, 0.09, 1.0);
    /// Dark blue for menu fill.
    pub const DARK_BLUE: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Dark gray for inactive borders.
    pub const DARK_GRAY: Color = Color::new(0.373, 0.341, 0.310, 1.0);
    /// Light gray for borders.
    pub const LIGHT_GRAY: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// White for primary text.
    pub const WHITE: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// Yellow for hover and selection.
    pub const YELLOW: Color = Color::new(1.0, 0.925, 0.153, 1.0);
    /// Translucent backdrop behind the help text.
    pub const SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.55);
}

/// Convert a simulation color to a macroquad color.
pub fn to_screen(color: sand_core::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Canvas background for the current theme.
pub fn background(dark_mode: bool) -> Color {
    if dark_mode {
        palette::NIGHT
    } else {
        palette::LIGHT_BLUE
    }
}

/// Text color that reads on the current background.
pub fn foreground(dark_mode: bool) -> Color {
    if dark_mode {
        palette::WHITE
    } else {
        palette::BLACK
    }
}

/// Convert a screen position to fractional grid coordinates.
pub fn screen_to_grid(x: f32, y: f32) -> (f32, f32) {
    let size = PIXEL_SIZE as f32;
    (x / size, y / size)
}
