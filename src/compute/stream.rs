//! Lazy, pull-based stream of generations.

use std::iter::FusedIterator;

use crate::schema::{BoundaryMode, ConfigError, DEFAULT_MAX_GENERATIONS};

use super::{ExitCode, Grid, History, check, step};

/// Times the final two frames are repeated once a cycle is detected.
pub const DRAIN_REPETITIONS: usize = 20;

/// Extra frames emitted after a cycle is detected.
pub const DRAIN_FRAMES: usize = 2 * DRAIN_REPETITIONS;

/// Stream lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Computing one generation per pull.
    Running,
    /// Replaying the last two frames; `remaining` frames left.
    Draining { remaining: usize },
    /// Exhausted.
    Done,
}

/// Finite sequence of generations starting from a seed.
///
/// The first element is the seed itself. Each later element is one rule
/// application, until the run reaches a steady state, a period-2
/// oscillation, or the generation budget. Cycles are followed by
/// [`DRAIN_FRAMES`] frames alternating between the last two generations so
/// that animations visibly loop.
///
/// Work for generation N+1 happens only when it is pulled.
#[derive(Debug, Clone)]
pub struct GenerationStream {
    boundary: BoundaryMode,
    max_generations: u64,
    history: History,
    generation: u64,
    state: StreamState,
    exit_code: ExitCode,
    seed_pending: bool,
}

impl GenerationStream {
    /// Start a stream from `seed`. Fails for a degenerate seed or budget.
    pub fn new(
        seed: Grid,
        boundary: BoundaryMode,
        max_generations: u64,
    ) -> Result<Self, ConfigError> {
        let (rows, cols) = seed.shape();
        if rows < 2 || cols < 2 {
            return Err(ConfigError::Size {
                parameter: "seed",
                value: format!("{}x{}", rows, cols),
                expected: "both dimensions >= 2",
            });
        }
        if max_generations == 0 {
            return Err(ConfigError::MaxGenerations {
                value: max_generations,
            });
        }

        let mut history = History::new();
        history.push(seed);

        Ok(Self {
            boundary,
            max_generations,
            history,
            generation: 0,
            state: StreamState::Running,
            exit_code: ExitCode::Continue,
            seed_pending: true,
        })
    }

    /// Stream with the default generation budget.
    pub fn with_default_budget(seed: Grid, boundary: BoundaryMode) -> Result<Self, ConfigError> {
        Self::new(seed, boundary, DEFAULT_MAX_GENERATIONS)
    }

    #[inline]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Generations computed so far (the seed is generation 0).
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Result of the most recent termination check.
    #[inline]
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    #[inline]
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    #[inline]
    pub fn max_generations(&self) -> u64 {
        self.max_generations
    }

    /// Grid shape as (rows, cols); constant for the whole run.
    pub fn shape(&self) -> (usize, usize) {
        self.history.latest().map_or((0, 0), Grid::shape)
    }

    fn advance(&mut self) -> Option<Grid> {
        let next = step(self.history.latest()?, self.boundary);
        self.history.push(next);
        self.generation += 1;
        self.exit_code = check(&self.history, self.generation, self.max_generations);

        log::debug!(
            "generation {}: population {}",
            self.generation,
            self.history.latest().map_or(0, Grid::population)
        );

        if !self.exit_code.is_terminal() {
            return self.history.latest().cloned();
        }

        if self.exit_code.is_cycle() {
            log::info!(
                "{:?} after {} generations",
                self.exit_code,
                self.generation
            );
            self.state = StreamState::Draining {
                remaining: DRAIN_FRAMES,
            };
            self.drain()
        } else {
            log::info!("generation budget of {} reached", self.max_generations);
            self.state = StreamState::Done;
            self.history.latest().cloned()
        }
    }

    fn drain(&mut self) -> Option<Grid> {
        let StreamState::Draining { remaining } = self.state else {
            return None;
        };
        if remaining == 0 {
            self.state = StreamState::Done;
            return None;
        }

        // The previous generation was emitted last, so the loop resumes with
        // the newest one: newer, older, newer, older ...
        let back = if (DRAIN_FRAMES - remaining) % 2 == 0 { 0 } else { 1 };
        let frame = self.history.back(back).cloned();
        self.state = if remaining == 1 {
            StreamState::Done
        } else {
            StreamState::Draining {
                remaining: remaining - 1,
            }
        };
        frame
    }
}

impl Iterator for GenerationStream {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            StreamState::Running if self.seed_pending => {
                self.seed_pending = false;
                self.history.latest().cloned()
            }
            StreamState::Running => self.advance(),
            StreamState::Draining { .. } => self.drain(),
            StreamState::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            StreamState::Running => {
                let steps = (self.max_generations - self.generation) as usize;
                let seed = usize::from(self.seed_pending);
                // A cycle replaces the step that detects it with the drain frames.
                let upper = seed + steps.saturating_sub(1) + DRAIN_FRAMES;
                (seed + 1, Some(upper))
            }
            StreamState::Draining { remaining } => (remaining, Some(remaining)),
            StreamState::Done => (0, Some(0)),
        }
    }
}

impl FusedIterator for GenerationStream {}
