//! Initial-state generation.

use rand::prelude::*;

use crate::schema::{ConfigError, PatternType};

use super::{Grid, TilingSymmetry, decompose, random_tile};

/// Seed generator over an injected random source.
///
/// Every random choice (cell noise, tile style, orientation, tiling layout,
/// decomposition) is drawn from `rng`, so a seeded source reproduces a run.
pub struct SeedGenerator<R = StdRng> {
    rng: R,
}

impl SeedGenerator<StdRng> {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> SeedGenerator<R> {
    /// Wrap an existing random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Build a `rows x cols` seed of the given pattern type.
    ///
    /// `Tiles` requires a square grid whose side decomposes (see [`decompose`]).
    pub fn seed(
        &mut self,
        rows: usize,
        cols: usize,
        pattern: PatternType,
    ) -> Result<Grid, ConfigError> {
        match pattern {
            PatternType::Noise => self.noise(rows, cols),
            PatternType::Tiles => {
                if rows != cols {
                    return Err(ConfigError::Size {
                        parameter: "size",
                        value: format!("{}x{}", rows, cols),
                        expected: "a square grid for the tiles pattern",
                    });
                }
                self.symmetric(rows)
            }
        }
    }

    /// Every cell an independent fair coin flip.
    pub fn noise(&mut self, rows: usize, cols: usize) -> Result<Grid, ConfigError> {
        let count = Grid::cell_count(rows, cols)?;
        let cells = (0..count)
            .map(|_| u8::from(self.rng.gen_bool(0.5)))
            .collect();
        Grid::from_cells(rows, cols, cells)
    }

    /// Symmetric `n x n` seed built from a random tile.
    pub fn symmetric(&mut self, n: usize) -> Result<Grid, ConfigError> {
        let pairs = decompose(n)?;
        let &(count, tile_size) = pairs.choose(&mut self.rng).ok_or(ConfigError::Decomposition {
            size: n,
            reason: "no tile decomposition available",
        })?;

        let tile = random_tile(&mut self.rng, tile_size);
        let symmetry = *TilingSymmetry::ALL
            .choose(&mut self.rng)
            .unwrap_or(&TilingSymmetry::Repeat);
        log::debug!(
            "tiled seed {}x{}: {} tiles of side {}, {:?}",
            n,
            n,
            count,
            tile_size,
            symmetry
        );

        let grid = symmetry.arrange(&tile, count);
        debug_assert_eq!(grid.shape(), (n, n));
        Ok(grid)
    }
}
