use std::fmt;

use crate::material::Material;

/// Stable handle to a placed cell. Moves and swaps keep the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) u32);

impl CellId {
    /// Slab index backing this id.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

/// One simulation entity occupying a single grid slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub(crate) id: CellId,
    pub(crate) x: i32,
    pub(crate) y: i32,
    /// What the cell is made of.
    pub material: Material,
}

impl Cell {
    /// This cell's handle.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Column of the slot this cell occupies.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row of the slot this cell occupies (0 is the top).
    pub fn y(&self) -> i32 {
        self.y
    }

    /// `(x, y)` of the occupied slot.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
