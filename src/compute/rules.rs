//! Game of Life transition rule (B3/S23) and the single-generation step.

use crate::schema::BoundaryMode;

use super::{CountGrid, Grid, neighbor_counts, pad};

/// Next cell value indexed by `[cell][neighbors]`.
pub const RULE_TABLE: [[u8; 9]; 2] = [
    // Dead: born with exactly 3 neighbors.
    [0, 0, 0, 1, 0, 0, 0, 0, 0],
    // Live: survives with 2 or 3 neighbors.
    [0, 0, 1, 1, 0, 0, 0, 0, 0],
];

/// Compute the next value of a cell from its value and live-neighbor count.
///
/// - live with 0-1 neighbors dies (underpopulation)
/// - live with 2-3 neighbors survives
/// - live with 4+ neighbors dies (overpopulation)
/// - dead with exactly 3 neighbors is born
#[inline]
pub fn next_state(cell: u8, neighbors: u8) -> u8 {
    let survives = cell == 1 && (neighbors == 2 || neighbors == 3);
    let born = cell == 0 && neighbors == 3;
    u8::from(neighbors < 4 && (survives || born))
}

/// Table form of [`next_state`].
#[inline]
pub fn lookup(cell: u8, neighbors: u8) -> u8 {
    RULE_TABLE[cell as usize][neighbors as usize]
}

/// Apply the rule to every cell.
pub fn apply_rule(grid: &Grid, counts: &CountGrid) -> Grid {
    debug_assert_eq!(grid.shape(), (counts.rows, counts.cols));
    Grid::from_fn(grid.rows(), grid.cols(), |r, c| {
        next_state(grid.get(r, c), counts.get(r, c)) == 1
    })
}

/// Advance `grid` by one generation under `mode`.
pub fn step(grid: &Grid, mode: BoundaryMode) -> Grid {
    let padded = pad(grid, mode);
    let counts = neighbor_counts(&padded, grid);
    apply_rule(grid, &counts)
}
