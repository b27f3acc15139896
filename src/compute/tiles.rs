//! Symmetric tile construction and tiling layouts for structured seeds.
//!
//! A tiled seed of side `n` is built from a `b x b` tile arranged into a
//! 2x2 symmetric block, then repeated `a x a` times, where `a * b = n / 2`.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::schema::ConfigError;

use super::{Grid, Tile};

/// Generator producing a diagonally structured tile from a random upper triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    /// Upper triangle reflected across the main diagonal.
    Diagonal,
    /// Upper triangle with the bit-complement of its transpose below.
    InvertedDiagonal,
    /// Upper triangle only; the lower triangle stays dead.
    Quilt,
}

impl TileStyle {
    pub const ALL: [TileStyle; 3] = [
        TileStyle::Diagonal,
        TileStyle::InvertedDiagonal,
        TileStyle::Quilt,
    ];

    /// Build a tile from `upper`, whose strictly-lower triangle is ignored.
    pub fn from_upper(self, upper: &Tile) -> Tile {
        let n = upper.rows();
        debug_assert_eq!(upper.cols(), n);

        Grid::from_fn(n, n, |r, c| {
            let above = r <= c;
            match self {
                TileStyle::Quilt => above && upper.is_alive(r, c),
                TileStyle::Diagonal => {
                    if above {
                        upper.is_alive(r, c)
                    } else {
                        upper.is_alive(c, r)
                    }
                }
                TileStyle::InvertedDiagonal => {
                    if r < c {
                        upper.is_alive(r, c)
                    } else if r > c {
                        !upper.is_alive(c, r)
                    } else {
                        // Triangle and complement overlap on the diagonal.
                        true
                    }
                }
            }
        })
    }
}

/// Final reorientation applied to a finished tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    FlipHorizontal,
    FlipVertical,
    Rotate90,
    Identity,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::FlipHorizontal,
        Orientation::FlipVertical,
        Orientation::Rotate90,
        Orientation::Identity,
    ];

    pub fn apply(self, tile: Tile) -> Tile {
        match self {
            Orientation::FlipHorizontal => tile.flip_horizontal(),
            Orientation::FlipVertical => tile.flip_vertical(),
            Orientation::Rotate90 => tile.rotate90(),
            Orientation::Identity => tile,
        }
    }
}

/// Layout replicating a tile into a 2x2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingSymmetry {
    /// Radial symmetry:
    /// ```text
    /// A B B A
    /// C D D C
    /// C D D C
    /// A B B A
    /// ```
    FourCorners,
    /// Mirror to the right, repeated down (vertical axis of symmetry):
    /// ```text
    /// A B B A
    /// A B B A
    /// ```
    BookMatch,
    /// Mirror below, repeated across (horizontal axis of symmetry):
    /// ```text
    /// A A A A
    /// B B B B
    /// B B B B
    /// A A A A
    /// ```
    Hamburger,
    /// Plain 2x2 repetition.
    Repeat,
}

impl TilingSymmetry {
    pub const ALL: [TilingSymmetry; 4] = [
        TilingSymmetry::FourCorners,
        TilingSymmetry::BookMatch,
        TilingSymmetry::Hamburger,
        TilingSymmetry::Repeat,
    ];

    /// Assemble the 2x2 block for `tile`.
    pub fn block(self, tile: &Tile) -> Grid {
        match self {
            TilingSymmetry::FourCorners => {
                let ne = tile.flip_horizontal();
                let sw = tile.flip_vertical();
                let se = ne.flip_vertical();
                tile.hstack(&ne).vstack(&sw.hstack(&se))
            }
            TilingSymmetry::BookMatch => {
                let row = tile.hstack(&tile.flip_horizontal());
                row.vstack(&row)
            }
            TilingSymmetry::Hamburger => {
                let bottom = tile.flip_vertical();
                tile.hstack(tile).vstack(&bottom.hstack(&bottom))
            }
            TilingSymmetry::Repeat => tile.tile(2, 2),
        }
    }

    /// Block for `tile` repeated `count x count` times.
    pub fn arrange(self, tile: &Tile, count: usize) -> Grid {
        self.block(tile).tile(count, count)
    }
}

/// Split seed side `n` into `(pattern_count, tile_size)` candidates.
///
/// With `k = n / 2`, returns every `(a, b)` with `a * b == k` and `2 <= a <= b`.
pub fn decompose(n: usize) -> Result<Vec<(usize, usize)>, ConfigError> {
    if n % 2 != 0 {
        return Err(ConfigError::Decomposition {
            size: n,
            reason: "size must be even",
        });
    }
    let k = n / 2;
    let pairs: Vec<(usize, usize)> = (2..)
        .take_while(|a| a * a <= k)
        .filter(|a| k % a == 0)
        .map(|a| (a, k / a))
        .collect();

    if pairs.is_empty() {
        return Err(ConfigError::Decomposition {
            size: n,
            reason: "half the size has no factor pair with both factors >= 2",
        });
    }
    Ok(pairs)
}

/// Uniform noise tile of side `n` with only the upper triangle kept.
pub fn upper_triangle<R: Rng>(rng: &mut R, n: usize) -> Tile {
    Grid::from_fn(n, n, |r, c| {
        let bit = rng.gen_bool(0.5);
        r <= c && bit
    })
}

/// Random symmetric tile: random style, then a random orientation.
pub fn random_tile<R: Rng>(rng: &mut R, n: usize) -> Tile {
    let orientation = *Orientation::ALL.choose(rng).unwrap_or(&Orientation::Identity);
    let style = *TileStyle::ALL.choose(rng).unwrap_or(&TileStyle::Quilt);
    log::trace!("tile {}x{}: {:?}, {:?}", n, n, style, orientation);

    let upper = upper_triangle(rng, n);
    orientation.apply(style.from_upper(&upper))
}
