//! Right-click brush menu.

use macroquad::prelude::*;
use sand_core::{Brush, MaterialFactory};

use crate::theme::to_screen;
use crate::widget::Rect2;
use crate::widget::button::draw_entry;

/// Width of one menu entry in screen pixels.
pub const ITEM_W: f32 = 128.0;
/// Height of one menu entry in screen pixels.
pub const ITEM_H: f32 = 22.0;

/// A popup listing every brush, anchored where it was opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    origin: Option<(f32, f32)>,
}

impl Menu {
    /// Whether the menu is showing.
    pub fn is_open(&self) -> bool {
        self.origin.is_some()
    }

    /// Open at `(x, y)`, shifted so the whole menu fits on a
    /// `screen_w` × `screen_h` screen.
    pub fn open_at(&mut self, x: f32, y: f32, screen_w: f32, screen_h: f32) {
        let height = ITEM_H * Brush::ALL.len() as f32;
        let x = x.min(screen_w - ITEM_W).max(0.0);
        let y = y.min(screen_h - height).max(0.0);
        self.origin = Some((x, y));
    }

    /// Hide the menu.
    pub fn close(&mut self) {
        self.origin = None;
    }

    /// Screen area of the `index`th entry while open.
    pub fn item_rect(&self, index: usize) -> Option<Rect2> {
        let (x, y) = self.origin?;
        (index < Brush::ALL.len()).then(|| Rect2::new(x, y + ITEM_H * index as f32, ITEM_W, ITEM_H))
    }

    /// The brush under `(x, y)`, if the menu is open and the point is on an entry.
    pub fn hit(&self, x: f32, y: f32) -> Option<Brush> {
        (0..Brush::ALL.len())
            .find(|&i| self.item_rect(i).is_some_and(|r| r.contains(x, y)))
            .map(|i| Brush::ALL[i])
    }

    /// Draw every entry, marking `current` and the one under the pointer.
    pub fn draw(&self, factory: &MaterialFactory, current: Brush, mouse: (f32, f32)) {
        for (i, brush) in Brush::ALL.into_iter().enumerate() {
            let Some(area) = self.item_rect(i) else {
                return;
            };
            let swatch = match brush {
                Brush::Material(kind) => {
                    let colors = factory.swatches(kind);
                    colors.get(colors.len() / 2).copied().map(to_screen)
                }
                Brush::Erase => None,
            };
            let label = format!("{} {}", i + 1, brush.name());
            draw_entry(
                &label,
                swatch,
                &area,
                area.contains(mouse.0, mouse.1),
                brush == current,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sand_core::MaterialKind;

    #[test]
    fn closed_menu_hits_nothing() {
        let menu = Menu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.hit(0.0, 0.0), None);
        assert_eq!(menu.item_rect(0), None);
    }

    #[test]
    fn entries_stack_in_brush_order() {
        let mut menu = Menu::default();
        menu.open_at(10.0, 20.0, 640.0, 360.0);
        assert_eq!(
            menu.hit(15.0, 25.0),
            Some(Brush::Material(MaterialKind::Sand))
        );
        assert_eq!(
            menu.hit(15.0, 20.0 + ITEM_H * 3.5),
            Some(Brush::Material(MaterialKind::Water))
        );
        assert_eq!(menu.hit(15.0, 20.0 + ITEM_H * 5.5), Some(Brush::Erase));
        assert_eq!(menu.hit(15.0, 20.0 + ITEM_H * 6.5), None);
        assert_eq!(menu.hit(10.0 + ITEM_W + 1.0, 25.0), None);
    }

    #[test]
    fn opens_inside_the_screen() {
        let mut menu = Menu::default();
        menu.open_at(630.0, 350.0, 640.0, 360.0);
        let last = menu.item_rect(Brush::ALL.len() - 1).unwrap();
        assert!(last.x + last.w <= 640.0);
        assert!(last.y + last.h <= 360.0);
    }

    #[test]
    fn close_hides() {
        let mut menu = Menu::default();
        menu.open_at(0.0, 0.0, 640.0, 360.0);
        menu.close();
        assert!(!menu.is_open());
    }
}
