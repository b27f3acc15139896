//! Independent simulation runs evaluated in parallel.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::schema::{ConfigError, SimulationConfig};

use super::{ExitCode, Simulation};

/// Outcome of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Position of the run in the batch.
    pub index: usize,
    pub label: String,
    /// Frames produced, including the seed and any drain frames.
    pub frames: usize,
    /// Generations computed before termination.
    pub generations: u64,
    pub exit_code: ExitCode,
    /// Live cells in the last frame.
    pub final_population: usize,
}

/// Run `runs` simulations of `config` in parallel.
///
/// Each run owns its RNG. With `random_seed` set, run `i` is seeded with
/// `random_seed + i`, so batches are reproducible. Summaries are returned in
/// run order.
pub fn run_batch(config: &SimulationConfig, runs: usize) -> Result<Vec<RunSummary>, ConfigError> {
    let simulation = Simulation::new(config.clone())?;
    let label = simulation.label();

    (0..runs)
        .into_par_iter()
        .map(|index| -> Result<RunSummary, ConfigError> {
            let mut rng = match config.random_seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => StdRng::from_entropy(),
            };
            let mut stream = simulation.start_with(&mut rng)?;

            let mut frames = 0;
            let mut final_population = 0;
            for frame in stream.by_ref() {
                frames += 1;
                final_population = frame.population();
            }

            Ok(RunSummary {
                index,
                label: label.clone(),
                frames,
                generations: stream.generation(),
                exit_code: stream.exit_code(),
                final_population,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BoundaryMode, PatternType};

    fn config() -> SimulationConfig {
        SimulationConfig {
            rows: 12,
            cols: 12,
            boundary: BoundaryMode::Fixed,
            pattern: PatternType::Tiles,
            max_generations: 40,
            random_seed: Some(7),
        }
    }

    #[test]
    fn test_batch_in_order_and_terminal() {
        let summaries = run_batch(&config(), 6).unwrap();
        assert_eq!(summaries.len(), 6);
        for (i, s) in summaries.iter().enumerate() {
            assert_eq!(s.index, i);
            assert_eq!(s.label, "12x12_fixed_tiles");
            assert!(s.exit_code.is_terminal());
            assert!(s.generations <= 40);
            assert!(s.frames as u64 <= 40 + 40);
        }
    }

    #[test]
    fn test_seeded_batch_reproduces() {
        assert_eq!(run_batch(&config(), 4).unwrap(), run_batch(&config(), 4).unwrap());
    }

    #[test]
    fn test_batch_validates_first() {
        let bad = SimulationConfig {
            rows: 11,
            cols: 11,
            ..config()
        };
        assert!(matches!(
            run_batch(&bad, 3),
            Err(ConfigError::Decomposition { size: 11, .. })
        ));
    }
}
