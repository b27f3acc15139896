//! Binary cell grid shared by every simulation stage.

use std::fmt;

use serde::Serialize;

use crate::schema::ConfigError;

/// Rectangular grid of cells, 0 = dead and 1 = live.
///
/// Data is stored row-major as a flat array: `cells[row * cols + col]`.
/// A grid is never mutated once built; each generation is a new grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

/// Square grid used as the building block of tiled seeds.
pub type Tile = Grid;

impl Grid {
    /// Number of cells in a `rows x cols` grid, rejecting degenerate or
    /// unaddressable shapes.
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize, ConfigError> {
        if rows < 2 || cols < 2 {
            return Err(ConfigError::Size {
                parameter: "size",
                value: format!("{}x{}", rows, cols),
                expected: "both dimensions >= 2",
            });
        }
        rows.checked_mul(cols).ok_or_else(|| ConfigError::Size {
            parameter: "size",
            value: format!("{}x{}", rows, cols),
            expected: "a cell count that fits in memory addressing",
        })
    }

    /// All-dead grid.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let count = Self::cell_count(rows, cols)?;
        Self::from_cells(rows, cols, vec![0; count])
    }

    /// Build from row vectors. Rows must be equally long and hold only 0/1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return Err(ConfigError::Size {
                parameter: "rows",
                value: format!("{:?}", rows.iter().map(Vec::len).collect::<Vec<_>>()),
                expected: "rows of equal length",
            });
        }
        Self::from_cells(height, width, rows.into_iter().flatten().collect())
    }

    /// Build from a flat row-major buffer.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self, ConfigError> {
        if cells.len() != Self::cell_count(rows, cols)? {
            return Err(ConfigError::Size {
                parameter: "cells",
                value: cells.len().to_string(),
                expected: "exactly rows * cols cells",
            });
        }
        if let Some(v) = cells.iter().find(|&&v| v > 1) {
            return Err(ConfigError::Size {
                parameter: "cells",
                value: v.to_string(),
                expected: "cell values of 0 or 1",
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build cell by cell. Shape checks are the caller's responsibility.
    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(u8::from(f(r, c)));
            }
        }
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get grid shape as (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 1
    }

    /// Row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&self) -> Self {
        Self::from_fn(self.rows, self.cols, |r, c| {
            self.is_alive(r, self.cols - 1 - c)
        })
    }

    /// Mirror top to bottom.
    pub fn flip_vertical(&self) -> Self {
        Self::from_fn(self.rows, self.cols, |r, c| {
            self.is_alive(self.rows - 1 - r, c)
        })
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn rotate90(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| {
            self.is_alive(c, self.cols - 1 - r)
        })
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self.is_alive(c, r))
    }

    /// Place `other` to the right. Row counts must match.
    pub fn hstack(&self, other: &Grid) -> Self {
        debug_assert_eq!(self.rows, other.rows);
        Self::from_fn(self.rows, self.cols + other.cols, |r, c| {
            if c < self.cols {
                self.is_alive(r, c)
            } else {
                other.is_alive(r, c - self.cols)
            }
        })
    }

    /// Place `other` below. Column counts must match.
    pub fn vstack(&self, other: &Grid) -> Self {
        debug_assert_eq!(self.cols, other.cols);
        Self::from_fn(self.rows + other.rows, self.cols, |r, c| {
            if r < self.rows {
                self.is_alive(r, c)
            } else {
                other.is_alive(r - self.rows, c)
            }
        })
    }

    /// Repeat the whole grid `down` times vertically and `across` times horizontally.
    pub fn tile(&self, down: usize, across: usize) -> Self {
        Self::from_fn(self.rows * down, self.cols * across, |r, c| {
            self.is_alive(r % self.rows, c % self.cols)
        })
    }

    /// Copy of the `rows x cols` window whose top-left corner is (row, col).
    pub fn region(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |r, c| self.is_alive(row + r, col + c))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row
                .iter()
                .map(|&v| if v == 1 { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(vec![vec![1, 0, 0], vec![1, 1, 0]]).unwrap()
    }

    #[test]
    fn test_from_rows_validates() {
        assert!(Grid::from_rows(vec![vec![1, 0], vec![0]]).is_err());
        assert!(Grid::from_rows(vec![vec![1, 2], vec![0, 0]]).is_err());
        assert!(Grid::from_rows(vec![vec![1, 0]]).is_err());
        assert!(Grid::zeros(1, 5).is_err());
        assert_eq!(Grid::zeros(3, 4).unwrap().population(), 0);
    }

    #[test]
    fn test_cell_count_rejects_overflow() {
        assert_eq!(Grid::cell_count(3, 4), Ok(12));
        assert!(matches!(Grid::cell_count(1, 4), Err(ConfigError::Size { .. })));
        assert!(matches!(
            Grid::cell_count(usize::MAX / 2, 3),
            Err(ConfigError::Size { .. })
        ));
        assert!(Grid::zeros(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_flips() {
        let g = sample();
        assert_eq!(
            g.flip_horizontal(),
            Grid::from_rows(vec![vec![0, 0, 1], vec![0, 1, 1]]).unwrap()
        );
        assert_eq!(
            g.flip_vertical(),
            Grid::from_rows(vec![vec![1, 1, 0], vec![1, 0, 0]]).unwrap()
        );
    }

    #[test]
    fn test_rotate_counter_clockwise() {
        let g = sample();
        let r = g.rotate90();
        assert_eq!(r.shape(), (3, 2));
        assert_eq!(
            r,
            Grid::from_rows(vec![vec![0, 0], vec![0, 1], vec![1, 1]]).unwrap()
        );
        assert_eq!(r.rotate90().rotate90().rotate90(), g);
    }

    #[test]
    fn test_transpose() {
        let g = sample();
        assert_eq!(g.transpose().transpose(), g);
        assert_eq!(g.transpose().get(2, 1), g.get(1, 2));
    }

    #[test]
    fn test_stack_and_tile() {
        let g = sample();
        let wide = g.hstack(&g.flip_horizontal());
        assert_eq!(wide.shape(), (2, 6));
        assert_eq!(wide.region(0, 3, 2, 3), g.flip_horizontal());

        let tall = g.vstack(&g);
        assert_eq!(tall.shape(), (4, 3));
        assert_eq!(tall.region(2, 0, 2, 3), g);

        let tiled = g.tile(2, 3);
        assert_eq!(tiled.shape(), (4, 9));
        assert_eq!(tiled.population(), g.population() * 6);
        assert_eq!(tiled.region(2, 6, 2, 3), g);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "#..\n##.\n");
    }
}
