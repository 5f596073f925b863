pub mod materials;
pub mod palette;
pub mod simulate;

use colored::{ColoredString, Colorize};
use sand_core::Color;

/// A two-character block painted in `color`.
fn swatch(color: Color) -> ColoredString {
    "  ".on_truecolor(color.r, color.g, color.b)
}
