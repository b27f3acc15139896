//! Boundary padding for neighbor lookups.
//!
//! The padded grid carries a one-cell border on every side so that a 3x3
//! window centered on any original cell stays in bounds.

use crate::schema::BoundaryMode;

use super::Grid;

/// Pad `grid` with a one-cell border according to `mode`.
///
/// - `Fixed`: the border is dead.
/// - `Periodic`: the border copies the opposite edge; each corner copies the
///   diagonally opposite corner of the grid.
pub fn pad(grid: &Grid, mode: BoundaryMode) -> Grid {
    let (rows, cols) = grid.shape();

    match mode {
        BoundaryMode::Fixed => Grid::from_fn(rows + 2, cols + 2, |r, c| {
            let inside = (1..=rows).contains(&r) && (1..=cols).contains(&c);
            inside && grid.is_alive(r - 1, c - 1)
        }),
        BoundaryMode::Periodic => Grid::from_fn(rows + 2, cols + 2, |r, c| {
            // Padded index p maps to source (p - 1) mod n.
            let sr = (r + rows - 1) % rows;
            let sc = (c + cols - 1) % cols;
            grid.is_alive(sr, sc)
        }),
    }
}
