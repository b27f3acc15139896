//! Live-neighbor counting over a padded grid.
//!
//! The 3x3 window sum is computed as a separable box filter: a horizontal
//! pass over every padded row, then a vertical pass over those partial sums.

use super::Grid;

/// Per-cell live-neighbor counts, aligned cell-for-cell with the source grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountGrid {
    pub rows: usize,
    pub cols: usize,
    /// Row-major counts in [0, 8].
    pub counts: Vec<u8>,
}

impl CountGrid {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.cols + col]
    }
}

/// Count live neighbors of every cell of `original`.
///
/// `padded` must be `original` with a one-cell border (see [`super::pad`]).
/// Each count is the 3x3 window sum centered at `(i + 1, j + 1)` in the
/// padded grid minus the cell's own value.
pub fn neighbor_counts(padded: &Grid, original: &Grid) -> CountGrid {
    let (rows, cols) = original.shape();
    debug_assert_eq!(padded.shape(), (rows + 2, cols + 2));

    let pw = cols + 2;
    let src = padded.cells();

    // Horizontal pass: window sums of width 3 for every padded row.
    let mut row_sums = vec![0u8; (rows + 2) * cols];
    for r in 0..rows + 2 {
        let line = &src[r * pw..(r + 1) * pw];
        let out = &mut row_sums[r * cols..(r + 1) * cols];
        for (c, w) in line.windows(3).enumerate() {
            out[c] = w[0] + w[1] + w[2];
        }
    }

    // Vertical pass, then remove the center cell.
    let own = original.cells();
    let mut counts = vec![0u8; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            let idx = r * cols + c;
            let window = row_sums[idx] + row_sums[idx + cols] + row_sums[idx + 2 * cols];
            counts[idx] = window - own[idx];
        }
    }

    CountGrid { rows, cols, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::pad;
    use crate::schema::BoundaryMode;

    /// Straightforward per-cell count used as a reference.
    fn naive_counts(grid: &Grid, mode: BoundaryMode) -> Vec<u8> {
        let (rows, cols) = grid.shape();
        let mut out = Vec::new();
        for r in 0..rows as i64 {
            for c in 0..cols as i64 {
                let mut n = 0;
                for dr in -1..=1i64 {
                    for dc in -1..=1i64 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let (nr, nc) = (r + dr, c + dc);
                        let alive = match mode {
                            BoundaryMode::Fixed => {
                                (0..rows as i64).contains(&nr)
                                    && (0..cols as i64).contains(&nc)
                                    && grid.is_alive(nr as usize, nc as usize)
                            }
                            BoundaryMode::Periodic => grid.is_alive(
                                nr.rem_euclid(rows as i64) as usize,
                                nc.rem_euclid(cols as i64) as usize,
                            ),
                        };
                        n += u8::from(alive);
                    }
                }
                out.push(n);
            }
        }
        out
    }

    fn checker() -> Grid {
        Grid::from_rows(vec![
            vec![1, 0, 1, 1, 0],
            vec![0, 1, 1, 0, 0],
            vec![1, 1, 0, 0, 1],
            vec![0, 0, 1, 1, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_matches_naive_count() {
        let g = checker();
        for mode in [BoundaryMode::Fixed, BoundaryMode::Periodic] {
            let counts = neighbor_counts(&pad(&g, mode), &g);
            assert_eq!(counts.counts, naive_counts(&g, mode), "{:?}", mode);
        }
    }

    #[test]
    fn test_full_grid_counts_eight_when_periodic() {
        let g = Grid::from_cells(3, 3, vec![1; 9]).unwrap();
        let counts = neighbor_counts(&pad(&g, BoundaryMode::Periodic), &g);
        assert!(counts.counts.iter().all(|&n| n == 8));

        let counts = neighbor_counts(&pad(&g, BoundaryMode::Fixed), &g);
        assert_eq!(counts.get(0, 0), 3);
        assert_eq!(counts.get(0, 1), 5);
        assert_eq!(counts.get(1, 1), 8);
    }

    #[test]
    fn test_periodic_corner_sees_opposite_corner() {
        let mut cells = vec![0u8; 25];
        cells[0] = 1;
        cells[24] = 1;
        let g = Grid::from_cells(5, 5, cells).unwrap();

        let periodic = neighbor_counts(&pad(&g, BoundaryMode::Periodic), &g);
        assert_eq!(periodic.get(0, 0), 1);
        assert_eq!(periodic.get(4, 4), 1);

        let fixed = neighbor_counts(&pad(&g, BoundaryMode::Fixed), &g);
        assert_eq!(fixed.get(0, 0), 0);
    }
}
