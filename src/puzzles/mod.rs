//! Mini-puzzle state machines. Each one is created fresh when a puzzle opens
//! and hands its score to the engine when the player finishes.

pub mod loader;
pub mod logic;
pub mod memory;
pub mod pattern;
pub mod reflex;

pub use loader::{LoadOutcome, PuzzleLoader};
pub use logic::LogicCircuit;
pub use memory::MemoryPuzzle;
pub use pattern::PatternQuestion;
pub use reflex::ReflexRound;

/// Uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64).floor() as usize).min(len - 1)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed list of values, cycling when exhausted.
    pub struct Scripted {
        values: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        pub fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }
}
