//! Configuration types for Life simulation parameters.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compute::{Grid, decompose};

/// Generation budget used when none is configured.
pub const DEFAULT_MAX_GENERATIONS: u64 = 1000;

/// Side length above which rendering consumers are warned about slow output.
pub const LARGE_GRID_ADVISORY: usize = 200;

fn default_max_generations() -> u64 {
    DEFAULT_MAX_GENERATIONS
}

/// How edge cells see neighbors outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BoundaryMode {
    /// Dead border: cells outside the grid are always 0.
    #[default]
    Fixed,
    /// Toroidal wrap: each edge touches the opposite edge.
    Periodic,
}

impl BoundaryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryMode::Fixed => "fixed",
            BoundaryMode::Periodic => "periodic",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(BoundaryMode::Fixed),
            "periodic" => Ok(BoundaryMode::Periodic),
            other => Err(ConfigError::Boundary {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for BoundaryMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How the initial grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PatternType {
    /// Independent fair coin flip per cell.
    Noise,
    /// Symmetric arrangement of a random tile.
    #[default]
    Tiles,
}

impl PatternType {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternType::Noise => "noise",
            PatternType::Tiles => "tiles",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noise" => Ok(PatternType::Noise),
            "tiles" => Ok(PatternType::Tiles),
            other => Err(ConfigError::Pattern {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for PatternType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Boundary topology.
    #[serde(default)]
    pub boundary: BoundaryMode,
    /// Seed pattern.
    #[serde(default)]
    pub pattern: PatternType,
    /// Number of generations after which the run stops.
    #[serde(default = "default_max_generations")]
    pub max_generations: u64,
    /// Fixed RNG seed for reproducible runs (None = entropy).
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            boundary: BoundaryMode::Fixed,
            pattern: PatternType::Tiles,
            max_generations: DEFAULT_MAX_GENERATIONS,
            random_seed: None,
        }
    }
}

impl SimulationConfig {
    /// Build a validated configuration from textual parameters.
    ///
    /// `size` is either a single side (`"64"`) or `"<rows>x<cols>"`.
    pub fn from_params(
        size: &str,
        boundary: &str,
        pattern: &str,
        max_generations: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let (rows, cols) = parse_size(size)?;
        let config = Self {
            rows,
            cols,
            boundary: boundary.parse()?,
            pattern: pattern.parse()?,
            max_generations: max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS),
            random_seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Get grid shape as (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Label encoding dimensions, boundary and pattern, e.g. `64x64_fixed_tiles`.
    pub fn label(&self) -> String {
        format!(
            "{}x{}_{}_{}",
            self.rows, self.cols, self.boundary, self.pattern
        )
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("rows", self.rows)?;
        check_dimension("cols", self.cols)?;
        Grid::cell_count(self.rows, self.cols)?;
        if self.max_generations == 0 {
            return Err(ConfigError::MaxGenerations {
                value: self.max_generations,
            });
        }
        if self.pattern == PatternType::Tiles {
            if self.rows != self.cols {
                return Err(ConfigError::Size {
                    parameter: "size",
                    value: format!("{}x{}", self.rows, self.cols),
                    expected: "a square grid for the tiles pattern",
                });
            }
            decompose(self.rows)?;
        }
        if self.rows.max(self.cols) > LARGE_GRID_ADVISORY {
            log::warn!(
                "{}x{} grid iterates fine but may take minutes to render; \
                 stay under {}x{} if you intend to animate it",
                self.rows,
                self.cols,
                LARGE_GRID_ADVISORY,
                LARGE_GRID_ADVISORY
            );
        }
        Ok(())
    }
}

fn check_dimension(parameter: &'static str, value: usize) -> Result<(), ConfigError> {
    if value < 2 {
        return Err(ConfigError::Size {
            parameter,
            value: value.to_string(),
            expected: "an integer >= 2",
        });
    }
    Ok(())
}

/// Parse `"n"` (square) or `"rows x cols"` into grid dimensions.
pub fn parse_size(size: &str) -> Result<(usize, usize), ConfigError> {
    let parts: Vec<&str> = size.trim().split(['x', 'X']).collect();
    let dims = parts
        .iter()
        .map(|p| {
            p.trim().parse::<usize>().map_err(|_| ConfigError::Size {
                parameter: "size",
                value: size.to_string(),
                expected: "positive integers",
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (rows, cols) = match dims.as_slice() {
        [n] => (*n, *n),
        [r, c] => (*r, *c),
        _ => {
            return Err(ConfigError::Size {
                parameter: "size",
                value: size.to_string(),
                expected: "one or two dimensions",
            });
        }
    };
    check_dimension("rows", rows)?;
    check_dimension("cols", cols)?;
    Ok((rows, cols))
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid `{parameter}` value '{value}': expected {expected}")]
    Size {
        parameter: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("Invalid `boundary` value '{value}': expected 'fixed' or 'periodic'")]
    Boundary { value: String },
    #[error("Invalid `pattern_type` value '{value}': expected 'noise' or 'tiles'")]
    Pattern { value: String },
    #[error("Size {size} cannot be built from tiles: {reason}; use the noise pattern or another size")]
    Decomposition { size: usize, reason: &'static str },
    #[error("Invalid `max_generations` value {value}: expected at least 1")]
    MaxGenerations { value: u64 },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error reading config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
