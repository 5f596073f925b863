use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cell::CellId;
use crate::color::Color;
use crate::config::SandConfig;
use crate::error::SandResult;
use crate::grid::Grid;
use crate::material::{Brush, MaterialFactory, MaterialKind};
use crate::rules;
use crate::stroke::pen;

/// One falling-sand session.
///
/// Owns the grid, the RNG, and the material factory. The host calls
/// [`Simulation::step`] once per animation frame and feeds pointer input
/// through [`Simulation::apply`].
pub struct Simulation {
    config: SandConfig,
    grid: Grid,
    rng: StdRng,
    factory: MaterialFactory,
    frame: u64,
    dark_mode: bool,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("frame", &self.frame)
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("cells", &self.grid.len())
            .finish()
    }
}

impl Simulation {
    /// Create an empty session from a validated configuration.
    pub fn new(config: SandConfig) -> SandResult<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let factory = MaterialFactory::new(config.gradient_stops, config.dither_step)?;
        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            dark_mode: config.dark_mode,
            config,
            grid,
            factory,
            frame: 0,
        })
    }

    /// Advance one frame: update every live cell once, oldest first.
    ///
    /// Cells see the moves made earlier in the same sweep.
    pub fn step(&mut self) {
        let mut i = 0;
        while let Some(&id) = self.grid.live().get(i) {
            rules::update(&mut self.grid, id, &mut self.rng);
            i += 1;
        }
        self.frame += 1;
    }

    /// Advance `n` frames.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Place a cell of `kind` at `(x, y)` if the slot is free and in bounds.
    pub fn spawn(&mut self, kind: MaterialKind, x: i32, y: i32) -> Option<CellId> {
        let factory = &mut self.factory;
        let rng = &mut self.rng;
        self.grid.create(x, y, || factory.build(kind, rng))
    }

    /// Remove the cell at `(x, y)`. Returns `false` if there was none.
    pub fn erase(&mut self, x: i32, y: i32) -> bool {
        self.grid.destroy(x, y)
    }

    /// Apply a brush at one cell. Returns whether the grid changed.
    pub fn apply(&mut self, brush: Brush, x: i32, y: i32) -> bool {
        match brush {
            Brush::Material(kind) => self.spawn(kind, x, y).is_some(),
            Brush::Erase => self.erase(x, y),
        }
    }

    /// Apply a brush with a square pen of side `size` centered on `(x, y)`.
    /// Returns how many slots changed.
    pub fn apply_pen(&mut self, brush: Brush, size: u32, x: i32, y: i32) -> usize {
        pen(size, x, y)
            .filter(|&(px, py)| self.apply(brush, px, py))
            .count()
    }

    /// Display color of a live cell.
    pub fn paint(&self, id: CellId) -> Option<Color> {
        self.grid
            .cell(id)
            .map(|cell| cell.material.display_color(self.dark_mode))
    }

    /// Call `draw(x, y, color)` for every live cell in update order.
    pub fn paint_all<F>(&self, mut draw: F)
    where
        F: FnMut(i32, i32, Color),
    {
        for cell in self.grid.cells() {
            draw(cell.x(), cell.y(), cell.material.display_color(self.dark_mode));
        }
    }

    /// Text render of the grid, one line per row without a trailing newline.
    ///
    /// Empty slots are `.`; occupied slots use [`Behavior::glyph`].
    ///
    /// [`Behavior::glyph`]: crate::material::Behavior::glyph
    pub fn ascii(&self) -> String {
        (0..self.grid.height())
            .map(|y| {
                (0..self.grid.width())
                    .map(|x| {
                        self.grid
                            .at(x, y)
                            .and_then(|id| self.grid.cell(id))
                            .map_or('.', |cell| cell.material.kind.behavior().glyph())
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Live cell counts per material, in [`MaterialKind::ALL`] order.
    pub fn counts(&self) -> Vec<(MaterialKind, usize)> {
        let mut counts = MaterialKind::ALL.map(|kind| (kind, 0));
        for cell in self.grid.cells() {
            if let Some(entry) = counts.iter_mut().find(|(k, _)| *k == cell.material.kind) {
                entry.1 += 1;
            }
        }
        counts.to_vec()
    }

    /// Whether blocks are drawn in the dark-mode color.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Switch the block color theme.
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Read access to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &SandConfig {
        &self.config
    }

    /// The factory that colors new cells.
    pub fn factory(&self) -> &MaterialFactory {
        &self.factory
    }
}
