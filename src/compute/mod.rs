//! Compute module - Grid evolution, seeding and termination for Life runs.

mod batch;
mod boundary;
mod cycle;
mod grid;
mod neighbors;
mod rules;
mod seed;
mod simulation;
mod stream;
mod tiles;

pub use batch::*;
pub use boundary::*;
pub use cycle::*;
pub use grid::*;
pub use neighbors::*;
pub use rules::*;
pub use seed::*;
pub use simulation::*;
pub use stream::*;
pub use tiles::*;
