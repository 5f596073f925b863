//! Per-material movement rules.
//!
//! Each rule looks only at the cell's immediate neighborhood and performs at
//! most one move per call. Nothing is remembered between frames: the decision
//! is recomputed from current occupancy every time.

use rand::Rng;
use rand::rngs::StdRng;

use crate::cell::CellId;
use crate::grid::Grid;
use crate::material::Behavior;

/// Up to three candidate offsets, picked from uniformly.
#[derive(Debug, Default)]
struct Candidates {
    moves: [(i32, i32); 3],
    len: usize,
}

impl Candidates {
    fn push(&mut self, dx: i32, dy: i32) {
        if self.len < self.moves.len() {
            self.moves[self.len] = (dx, dy);
            self.len += 1;
        }
    }

    /// Take the only candidate, or draw one when there are several.
    fn pick(&self, rng: &mut StdRng) -> Option<(i32, i32)> {
        match self.len {
            0 => None,
            1 => Some(self.moves[0]),
            n => Some(self.moves[rng.random_range(0..n)]),
        }
    }
}

/// Run the movement rule for `id`. Unknown ids are ignored.
pub fn update(grid: &mut Grid, id: CellId, rng: &mut StdRng) {
    let Some(behavior) = grid.cell(id).map(|c| c.material.kind.behavior()) else {
        return;
    };
    match behavior {
        Behavior::Granular => granular(grid, id, rng),
        Behavior::Fluid => fluid(grid, id, rng),
        Behavior::Static => {}
    }
}

/// Diagonal slides whose target and the side slot next to it are both free.
fn diagonals(grid: &Grid, id: CellId) -> Candidates {
    let mut moves = Candidates::default();
    if !grid.is_blocked(id, -1, 1) && !grid.is_blocked(id, -1, 0) {
        moves.push(-1, 1);
    }
    if !grid.is_blocked(id, 1, 1) && !grid.is_blocked(id, 1, 0) {
        moves.push(1, 1);
    }
    moves
}

/// Fall one row, else slide diagonally.
fn granular(grid: &mut Grid, id: CellId, rng: &mut StdRng) {
    if grid.move_by(id, 0, 1) {
        return;
    }
    if let Some((dx, dy)) = diagonals(grid, id).pick(rng) {
        grid.move_by(id, dx, dy);
    }
}

/// Fall one row; on a flat floor spread sideways, otherwise slide diagonally.
fn fluid(grid: &mut Grid, id: CellId, rng: &mut StdRng) {
    if grid.move_by(id, 0, 1) {
        return;
    }

    let floor_is_flat = grid.is_blocked(id, -1, 1)
        && grid.is_blocked(id, 0, 1)
        && grid.is_blocked(id, 1, 1);

    let moves = if floor_is_flat {
        let left = !grid.is_blocked(id, -1, 0);
        let right = !grid.is_blocked(id, 1, 0);
        let mut moves = Candidates::default();
        if left {
            moves.push(-1, 0);
        }
        if right {
            moves.push(1, 0);
        }
        if left && right {
            // settle in place
            moves.push(0, 0);
        }
        moves
    } else {
        diagonals(grid, id)
    };

    if let Some((dx, dy)) = moves.pick(rng) {
        grid.move_by(id, dx, dy);
    }
}
