//! Menu entry with a color swatch and hover/selected states.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::{TEXT_SIZE, palette};

/// Draw one brush entry. `swatch` is shown as a square before the label.
pub fn draw_entry(label: &str, swatch: Option<Color>, area: &Rect2, hovered: bool, selected: bool) {
    let border = if hovered || selected {
        palette::YELLOW
    } else {
        palette::LIGHT_GRAY
    };
    let text_color = if selected {
        palette::YELLOW
    } else {
        palette::WHITE
    };

    super::bordered_rect(area.x, area.y, area.w, area.h, palette::DARK_BLUE, border);

    let inner = area.inset(4.0);
    if let Some(color) = swatch {
        super::bordered_rect(inner.x, inner.y, inner.h, inner.h, color, palette::DARK_GRAY);
    }

    let ty = area.y + (area.h + TEXT_SIZE * 0.5) / 2.0;
    draw_text(label, inner.x + inner.h + 6.0, ty, TEXT_SIZE, text_color);
}
