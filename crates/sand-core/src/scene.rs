//! Preset block layouts and material sources.

use std::fmt;
use std::str::FromStr;

use crate::error::SandError;
use crate::material::{Brush, MaterialKind};
use crate::simulation::Simulation;

/// A starting layout of static blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Nothing placed.
    #[default]
    Empty,
    /// A solid bottom row.
    Floor,
    /// A floor with walls up both sides.
    Basin,
    /// Two sloped walls funnelling into a two-cell gap at mid-height, above a floor.
    Hourglass,
}

impl Scene {
    /// Every scene, in listing order.
    pub const ALL: [Scene; 4] = [Scene::Empty, Scene::Floor, Scene::Basin, Scene::Hourglass];

    /// Lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Floor => "floor",
            Self::Basin => "basin",
            Self::Hourglass => "hourglass",
        }
    }

    /// Place this scene's blocks. Returns how many were placed.
    ///
    /// Slots outside the grid or already taken are skipped.
    pub fn apply(self, sim: &mut Simulation) -> usize {
        let (w, h) = (sim.grid().width(), sim.grid().height());
        let mut cells: Vec<(i32, i32)> = Vec::new();

        let floor = (0..w).map(|x| (x, h - 1));
        match self {
            Self::Empty => {}
            Self::Floor => cells.extend(floor),
            Self::Basin => {
                cells.extend(floor);
                cells.extend((0..h - 1).flat_map(|y| [(0, y), (w - 1, y)]));
            }
            Self::Hourglass => {
                cells.extend(floor);
                let mid = h / 2;
                let center = w / 2;
                // the gap is columns center - 1 and center on row mid
                cells.extend((0..center - 1).map(|x| (x, mid - (center - 2 - x))));
                cells.extend((center + 1..w).map(|x| (x, mid - (x - center - 1))));
            }
        }

        cells
            .into_iter()
            .filter(|&(x, y)| sim.spawn(MaterialKind::Block, x, y).is_some())
            .count()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = SandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|scene| scene.name() == wanted)
            .ok_or_else(|| SandError::UnknownScene(s.to_string()))
    }
}

/// A fixed source that applies a brush every frame, like a held pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emitter {
    /// What to emit.
    pub brush: Brush,
    /// Center column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Number of columns covered, centered on `x`.
    pub width: u32,
}

impl Emitter {
    /// A single-cell source of `kind` at `(x, y)`.
    pub fn new(kind: MaterialKind, x: i32, y: i32) -> Self {
        Self {
            brush: Brush::Material(kind),
            x,
            y,
            width: 1,
        }
    }

    /// Cover `width` columns instead of one.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width.max(1);
        self
    }

    /// A source of `kind` at the top center of the grid.
    pub fn top_center(kind: MaterialKind, sim: &Simulation) -> Self {
        Self::new(kind, sim.grid().width() / 2, 0)
    }

    /// Apply the brush once. Returns how many slots changed.
    ///
    /// Columns that would overflow `i32` are skipped.
    pub fn emit(&self, sim: &mut Simulation) -> usize {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let half = width / 2;
        (0..width)
            .filter_map(|i| self.x.checked_add(i - half))
            .filter(|&x| sim.apply(self.brush, x, self.y))
            .count()
    }
}
