//! The slot matrix and the ordered list of live cells.

use crate::cell::{Cell, CellId};
use crate::error::{SandError, SandResult};
use crate::material::Material;

/// A fixed-size 2D grid of slots, each holding at most one cell.
///
/// The grid owns placement; the live list owns enumeration order. Every
/// operation keeps the two in agreement: a cell is in the live list exactly
/// when it occupies a slot, and its stored coordinates name that slot.
///
/// Out-of-bounds and occupied targets are ordinary outcomes, reported as
/// `false` or `None`.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    slots: Vec<Option<CellId>>,
    cells: Vec<Option<Cell>>,
    free: Vec<CellId>,
    live: Vec<CellId>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> SandResult<Self> {
        let invalid = || SandError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(invalid)?;
        Ok(Self {
            width: w,
            height: h,
            slots: vec![None; size],
            cells: Vec::new(),
            free: Vec::new(),
            live: Vec::new(),
        })
    }

    /// Width in slots.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in slots.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// `true` when no cell is placed.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn slot_index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// The cell occupying `(x, y)`, if any.
    pub fn at(&self, x: i32, y: i32) -> Option<CellId> {
        self.slot_index(x, y).and_then(|i| self.slots[i])
    }

    /// Look up a live cell.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())?.as_ref()
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.index())?.as_mut()
    }

    /// Live cell ids in update order (oldest first).
    pub fn live(&self) -> &[CellId] {
        &self.live
    }

    /// Live cells in update order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.live.iter().filter_map(|&id| self.cell(id))
    }

    /// Place a new cell at `(x, y)`.
    ///
    /// Returns `None` without calling `factory` if the slot is out of bounds
    /// or already occupied. Ids of removed cells may be handed out again.
    pub fn create<F>(&mut self, x: i32, y: i32, factory: F) -> Option<CellId>
    where
        F: FnOnce() -> Material,
    {
        let slot = self.slot_index(x, y)?;
        if self.slots[slot].is_some() {
            return None;
        }

        let material = factory();
        let id = self.free.pop().unwrap_or_else(|| {
            self.cells.push(None);
            CellId((self.cells.len() - 1) as u32)
        });
        self.cells[id.index()] = Some(Cell {
            id,
            x,
            y,
            material,
        });
        self.slots[slot] = Some(id);
        self.live.push(id);
        Some(id)
    }

    /// Remove the cell at `(x, y)`. Returns `false` if there was none.
    pub fn destroy(&mut self, x: i32, y: i32) -> bool {
        match self.at(x, y) {
            Some(id) => self.remove(id),
            None => false,
        }
    }

    /// Remove a specific cell from its slot and from the live list.
    pub fn remove(&mut self, id: CellId) -> bool {
        let Some(cell) = self.cells.get_mut(id.index()).and_then(Option::take) else {
            return false;
        };
        if let Some(slot) = self.slot_index(cell.x, cell.y) {
            self.slots[slot] = None;
        }
        if let Some(pos) = self.live.iter().position(|&live| live == id) {
            self.live.remove(pos);
        }
        self.free.push(id);
        true
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.cells.clear();
        self.free.clear();
        self.live.clear();
    }

    /// Absolute coordinates of `id` offset by `(dx, dy)`.
    fn target(&self, id: CellId, dx: i32, dy: i32) -> Option<(i32, i32)> {
        let cell = self.cell(id)?;
        Some((cell.x.checked_add(dx)?, cell.y.checked_add(dy)?))
    }

    /// The cell at offset `(dx, dy)` from `id`, if any.
    pub fn neighbor(&self, id: CellId, dx: i32, dy: i32) -> Option<CellId> {
        let (x, y) = self.target(id, dx, dy)?;
        self.at(x, y)
    }

    /// `true` if the slot at offset `(dx, dy)` is occupied or outside the
    /// grid. This is the only collision check the movement rules use.
    pub fn is_blocked(&self, id: CellId, dx: i32, dy: i32) -> bool {
        match self.target(id, dx, dy) {
            Some((x, y)) => match self.slot_index(x, y) {
                Some(slot) => self.slots[slot].is_some(),
                None => true,
            },
            None => true,
        }
    }

    /// Move `id` by `(dx, dy)` if the target slot is free and in bounds.
    ///
    /// A zero offset always succeeds and changes nothing, even though the
    /// cell's own slot counts as blocked.
    pub fn move_by(&mut self, id: CellId, dx: i32, dy: i32) -> bool {
        let Some((x, y)) = self.target(id, dx, dy) else {
            return false;
        };
        if dx == 0 && dy == 0 {
            return true;
        }
        let Some(to) = self.slot_index(x, y) else {
            return false;
        };
        if self.slots[to].is_some() {
            return false;
        }
        self.relocate(id, x, y);
        true
    }

    /// Exchange `id` with the cell at offset `(dx, dy)`.
    ///
    /// Both cells keep their identity. An empty target degrades to
    /// [`Grid::move_by`]; an out-of-bounds target fails.
    pub fn swap(&mut self, id: CellId, dx: i32, dy: i32) -> bool {
        let Some((x, y)) = self.target(id, dx, dy) else {
            return false;
        };
        let Some(to) = self.slot_index(x, y) else {
            return false;
        };
        let Some(other) = self.slots[to] else {
            return self.move_by(id, dx, dy);
        };
        if other == id {
            return true;
        }

        let Some((ox, oy)) = self.cell(id).map(Cell::position) else {
            return false;
        };
        let from = row_major(ox, oy, self.width);
        self.slots[from] = Some(other);
        self.slots[to] = Some(id);
        if let Some(cell) = self.cell_mut(other) {
            cell.x = ox;
            cell.y = oy;
        }
        if let Some(cell) = self.cell_mut(id) {
            cell.x = x;
            cell.y = y;
        }
        true
    }

    /// Move `id` to the free, in-bounds slot `(x, y)`.
    fn relocate(&mut self, id: CellId, x: i32, y: i32) {
        let width = self.width;
        let Some(cell) = self.cell_mut(id) else {
            return;
        };
        let from = row_major(cell.x, cell.y, width);
        cell.x = x;
        cell.y = y;
        self.slots[from] = None;
        self.slots[row_major(x, y, width)] = Some(id);
    }
}

/// Row-major slot index for in-bounds coordinates.
fn row_major(x: i32, y: i32, width: i32) -> usize {
    y as usize * width as usize + x as usize
}
