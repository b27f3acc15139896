//! Termination detection over a short rolling history of generations.

use std::collections::VecDeque;

use serde::Serialize;

use super::Grid;

/// Most generations the history ever holds.
pub const HISTORY_LEN: usize = 3;

/// Outcome of a termination check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitCode {
    Continue,
    /// Newest generation equals its predecessor.
    SteadyState,
    /// Newest generation equals the one two steps back.
    OscillatingPeriod2,
    MaxGenerationsReached,
}

impl ExitCode {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != ExitCode::Continue
    }

    /// Whether the run ended in a steady or oscillating loop.
    #[inline]
    pub fn is_cycle(self) -> bool {
        matches!(self, ExitCode::SteadyState | ExitCode::OscillatingPeriod2)
    }
}

/// Bounded FIFO of the most recent generations, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    frames: VecDeque<Grid>,
}

impl History {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    /// Append a generation, dropping the oldest beyond [`HISTORY_LEN`].
    pub fn push(&mut self, grid: Grid) {
        if self.frames.len() == HISTORY_LEN {
            self.frames.pop_front();
        }
        self.frames.push_back(grid);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn latest(&self) -> Option<&Grid> {
        self.frames.back()
    }

    /// Entry `back` steps behind the newest (0 = newest).
    pub fn back(&self, back: usize) -> Option<&Grid> {
        self.frames
            .len()
            .checked_sub(back + 1)
            .and_then(|i| self.frames.get(i))
    }
}

/// Decide whether a run continues after `generation` steps.
///
/// Steady state wins over oscillation, which wins over the generation budget.
pub fn check(history: &History, generation: u64, max_generations: u64) -> ExitCode {
    if let (Some(newest), Some(previous)) = (history.back(0), history.back(1)) {
        if newest == previous {
            return ExitCode::SteadyState;
        }
    }
    if history.len() == HISTORY_LEN && history.back(0) == history.back(2) {
        return ExitCode::OscillatingPeriod2;
    }
    if generation == max_generations {
        return ExitCode::MaxGenerationsReached;
    }
    ExitCode::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(v: u8) -> Grid {
        Grid::from_cells(2, 2, vec![v, 0, 0, v]).unwrap()
    }

    #[test]
    fn test_history_is_bounded() {
        let mut h = History::new();
        for i in 0..5 {
            h.push(grid((i % 2) as u8));
            assert!(h.len() <= HISTORY_LEN);
        }
        assert_eq!(h.len(), 3);
        assert_eq!(h.latest(), Some(&grid(0)));
        assert_eq!(h.back(1), Some(&grid(1)));
        assert_eq!(h.back(3), None);
    }

    #[test]
    fn test_continue_and_budget() {
        let mut h = History::new();
        h.push(grid(0));
        assert_eq!(check(&h, 0, 10), ExitCode::Continue);
        h.push(grid(1));
        assert_eq!(check(&h, 1, 10), ExitCode::Continue);
        assert_eq!(check(&h, 10, 10), ExitCode::MaxGenerationsReached);
    }

    #[test]
    fn test_steady_state() {
        let mut h = History::new();
        h.push(grid(1));
        h.push(grid(1));
        assert_eq!(check(&h, 1, 10), ExitCode::SteadyState);
    }

    #[test]
    fn test_oscillation() {
        let mut h = History::new();
        h.push(grid(1));
        h.push(grid(0));
        h.push(grid(1));
        assert_eq!(check(&h, 2, 10), ExitCode::OscillatingPeriod2);
        // Detection outranks the budget.
        assert_eq!(check(&h, 10, 10), ExitCode::OscillatingPeriod2);
    }

    #[test]
    fn test_steady_outranks_oscillation() {
        let mut h = History::new();
        h.push(grid(1));
        h.push(grid(1));
        h.push(grid(1));
        assert_eq!(check(&h, 2, 2), ExitCode::SteadyState);
    }

    #[test]
    fn test_exit_code_kinds() {
        assert!(!ExitCode::Continue.is_terminal());
        assert!(ExitCode::MaxGenerationsReached.is_terminal());
        assert!(!ExitCode::MaxGenerationsReached.is_cycle());
        assert!(ExitCode::OscillatingPeriod2.is_cycle());
    }
}
