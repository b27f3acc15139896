//! Tiled Life - Conway's Game of Life as a lazy stream of generations.
//!
//! This crate runs the B3/S23 automaton on a finite grid with either a dead
//! (fixed) or toroidal (periodic) boundary, seeded with uniform noise or a
//! symmetric arrangement of random tiles. Generations are produced one pull
//! at a time until the board settles, oscillates with period 2, or exhausts
//! its generation budget.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and validation errors
//! - `compute`: Grid, boundary padding, neighbor counting, rules, seeding,
//!   cycle detection and the generation stream
//!
//! # Example
//!
//! ```rust,no_run
//! use tiled_life::{
//!     compute::Simulation,
//!     schema::{BoundaryMode, PatternType, SimulationConfig},
//! };
//!
//! let config = SimulationConfig {
//!     rows: 32,
//!     cols: 32,
//!     boundary: BoundaryMode::Periodic,
//!     pattern: PatternType::Tiles,
//!     ..Default::default()
//! };
//!
//! let simulation = Simulation::new(config).expect("valid configuration");
//! let frames: Vec<_> = simulation.start().expect("seed").collect();
//!
//! println!("{}: {} frames", simulation.label(), frames.len());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{ExitCode, GenerationStream, Grid, SeedGenerator, Simulation};
pub use schema::{BoundaryMode, ConfigError, PatternType, SimulationConfig};
