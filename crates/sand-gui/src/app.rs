//! Application state for the interactive window.

use sand_core::{Brush, SandConfig, SandResult, Scene, Simulation, Stroke};

use crate::menu::Menu;

/// Largest pen side length.
pub const MAX_PEN: u32 = 9;

/// Everything the main loop mutates between frames.
pub struct AppState {
    /// The running session.
    pub sim: Simulation,
    /// Currently selected brush.
    pub brush: Brush,
    /// Side length of the square pen, in cells.
    pub pen_size: u32,
    /// Pointer path for the current drag.
    pub stroke: Stroke,
    /// Right-click brush menu.
    pub menu: Menu,
    /// Whether the first-run help is still showing.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Ignore the held button until it is released (after a menu click).
    swallow_press: bool,
}

impl AppState {
    /// Start a session and lay out `scene`.
    pub fn new(config: SandConfig, scene: Scene) -> SandResult<Self> {
        let mut sim = Simulation::new(config)?;
        scene.apply(&mut sim);
        Ok(Self {
            sim,
            brush: Brush::default(),
            pen_size: 3,
            stroke: Stroke::default(),
            menu: Menu::default(),
            show_help: true,
            should_quit: false,
            swallow_press: false,
        })
    }

    /// Feed this frame's pointer sample in grid coordinates.
    /// Returns how many slots changed.
    pub fn paint(&mut self, down: bool, gx: f32, gy: f32) -> usize {
        if self.swallow_press {
            if !down {
                self.swallow_press = false;
            }
            self.stroke.sample(false, gx, gy);
            return 0;
        }
        let points = self.stroke.sample(down, gx, gy);
        points
            .into_iter()
            .map(|(x, y)| self.sim.apply_pen(self.brush, self.pen_size, x, y))
            .sum()
    }

    /// Handle a left press while the menu is open. Picks the brush under
    /// the pointer and closes the menu either way.
    pub fn click_menu(&mut self, x: f32, y: f32) {
        if let Some(brush) = self.menu.hit(x, y) {
            self.brush = brush;
        }
        self.menu.close();
        self.swallow_press = true;
    }

    /// Open the brush menu at a screen position, ending any drag.
    pub fn open_menu(&mut self, x: f32, y: f32, screen_w: f32, screen_h: f32) {
        self.menu.open_at(x, y, screen_w, screen_h);
        self.stroke = Stroke::default();
        self.show_help = false;
    }

    /// Pick a brush directly.
    pub fn select(&mut self, brush: Brush) {
        self.brush = brush;
        self.menu.close();
    }

    /// Grow or shrink the pen, staying within `1..=MAX_PEN`.
    pub fn resize_pen(&mut self, delta: i32) {
        self.pen_size = self.pen_size.saturating_add_signed(delta).clamp(1, MAX_PEN);
    }

    /// Flip between the light and dark themes.
    pub fn toggle_dark_mode(&mut self) {
        let dark = !self.sim.dark_mode();
        self.sim.set_dark_mode(dark);
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        self.sim.clear();
    }

    /// Close the menu if it is open, otherwise quit.
    pub fn escape(&mut self) {
        if self.menu.is_open() {
            self.menu.close();
        } else {
            self.should_quit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use sand_core::MaterialKind;

    use super::*;

    fn app() -> AppState {
        AppState::new(SandConfig::default().with_size(20, 20), Scene::Empty).unwrap()
    }

    #[test]
    fn drag_paints_with_pen() {
        let mut app = app();
        assert_eq!(app.paint(true, 10.0, 10.0), 0);
        assert_eq!(app.paint(true, 10.0, 10.0), 9);
        assert_eq!(app.sim.grid().len(), 9);
    }

    #[test]
    fn release_stops_painting() {
        let mut app = app();
        app.paint(true, 5.0, 5.0);
        app.paint(false, 5.0, 5.0);
        assert_eq!(app.paint(true, 8.0, 8.0), 0);
    }

    #[test]
    fn erase_brush_removes() {
        let mut app = app();
        app.pen_size = 1;
        app.paint(true, 3.0, 3.0);
        app.paint(true, 3.0, 3.0);
        assert_eq!(app.sim.grid().len(), 1);

        app.paint(false, 3.0, 3.0);
        app.select(Brush::Erase);
        app.paint(true, 3.0, 3.0);
        assert_eq!(app.paint(true, 3.0, 3.0), 1);
        assert!(app.sim.grid().is_empty());
    }

    #[test]
    fn menu_click_selects_and_swallows_press() {
        let mut app = app();
        app.open_menu(0.0, 0.0, 640.0, 360.0);
        assert!(!app.show_help);
        let water = app.menu.item_rect(3).unwrap();
        app.click_menu(water.x + 1.0, water.y + 1.0);
        assert_eq!(app.brush, Brush::Material(MaterialKind::Water));
        assert!(!app.menu.is_open());

        // the selecting click is still held
        app.paint(true, 4.0, 4.0);
        assert_eq!(app.paint(true, 4.0, 4.0), 0);
        app.paint(false, 4.0, 4.0);
        app.paint(true, 4.0, 4.0);
        assert!(app.paint(true, 4.0, 4.0) > 0);
    }

    #[test]
    fn click_outside_menu_keeps_brush() {
        let mut app = app();
        app.open_menu(0.0, 0.0, 640.0, 360.0);
        app.click_menu(600.0, 300.0);
        assert_eq!(app.brush, Brush::default());
        assert!(!app.menu.is_open());
    }

    #[test]
    fn escape_closes_menu_before_quitting() {
        let mut app = app();
        app.open_menu(0.0, 0.0, 640.0, 360.0);
        app.escape();
        assert!(!app.should_quit);
        app.escape();
        assert!(app.should_quit);
    }

    #[test]
    fn pen_size_is_clamped() {
        let mut app = app();
        for _ in 0..20 {
            app.resize_pen(1);
        }
        assert_eq!(app.pen_size, MAX_PEN);
        for _ in 0..20 {
            app.resize_pen(-1);
        }
        assert_eq!(app.pen_size, 1);
    }

    #[test]
    fn dark_mode_and_clear() {
        let mut app = app();
        app.toggle_dark_mode();
        assert!(app.sim.dark_mode());
        app.paint(true, 1.0, 1.0);
        app.paint(true, 1.0, 1.0);
        app.clear();
        assert!(app.sim.grid().is_empty());
    }

    #[test]
    fn dark_config_starts_dark() {
        let config = SandConfig::default().with_size(4, 4).with_dark_mode(true);
        let mut app = AppState::new(config, Scene::Empty).unwrap();
        assert!(app.sim.dark_mode());
        app.toggle_dark_mode();
        assert!(!app.sim.dark_mode());
    }

    #[test]
    fn scene_is_applied_at_start() {
        let app = AppState::new(SandConfig::default().with_size(10, 5), Scene::Floor).unwrap();
        assert_eq!(app.sim.grid().len(), 10);
    }
}
