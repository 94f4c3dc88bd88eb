//! Sequence recall: watch cells light up, then repeat them in order.

use std::time::Duration;

use super::RandomSource;

pub const CELL_COUNT: usize = 9;
pub const HIGHLIGHT: Duration = Duration::from_millis(600);
pub const GAP: Duration = Duration::from_millis(200);
/// How long a tap lights its cell.
pub const TAP_FLASH: Duration = Duration::from_millis(300);
/// How long the correct/incorrect message stays up before the next round.
pub const FEEDBACK: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Watching,
    Input,
    /// Round finished; waiting for `feedback_done`.
    Feedback,
}

/// One cell of the playback: lit for `on`, then dark for `gap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackStep {
    pub cell: usize,
    pub on: Duration,
    pub gap: Duration,
}

impl PlaybackStep {
    pub fn total(&self) -> Duration {
        self.on + self.gap
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    Ignored,
    Accepted,
    /// Sequence matched; the level has advanced and `award` is reported.
    Correct { award: u64 },
    /// Sequence mismatched; input is cleared and the round can be retried.
    Wrong,
}

impl TapOutcome {
    /// Score to report to the engine. Only a matched sequence has one.
    pub fn award(self) -> Option<u64> {
        match self {
            TapOutcome::Correct { award } => Some(award),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryPuzzle {
    level: u32,
    sequence: Vec<usize>,
    input: Vec<usize>,
    phase: Phase,
}

impl Default for MemoryPuzzle {
    fn default() -> Self {
        Self {
            level: 1,
            sequence: Vec::new(),
            input: Vec::new(),
            phase: Phase::Idle,
        }
    }
}

impl MemoryPuzzle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub fn input(&self) -> &[usize] {
        &self.input
    }

    pub fn sequence_len(&self) -> usize {
        self.level as usize + 2
    }

    /// Generates a new sequence and returns its playback schedule. Ignored
    /// unless idle.
    pub fn begin(&mut self, rng: &mut impl RandomSource) -> Option<Vec<PlaybackStep>> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.sequence = (0..self.sequence_len())
            .map(|_| rng.index(CELL_COUNT))
            .collect();
        self.input.clear();
        self.phase = Phase::Watching;
        Some(
            self.sequence
                .iter()
                .map(|&cell| PlaybackStep {
                    cell,
                    on: HIGHLIGHT,
                    gap: GAP,
                })
                .collect(),
        )
    }

    pub fn playback_finished(&mut self) {
        if self.phase == Phase::Watching {
            self.input.clear();
            self.phase = Phase::Input;
        }
    }

    pub fn tap(&mut self, cell: usize) -> TapOutcome {
        if self.phase != Phase::Input || cell >= CELL_COUNT {
            return TapOutcome::Ignored;
        }
        self.input.push(cell);
        if self.input.len() < self.sequence.len() {
            return TapOutcome::Accepted;
        }
        self.phase = Phase::Feedback;
        if self.input == self.sequence {
            self.level += 1;
            TapOutcome::Correct {
                award: u64::from(self.level) * 10,
            }
        } else {
            self.input.clear();
            TapOutcome::Wrong
        }
    }

    /// Feedback message expired; ready for another `begin`.
    pub fn feedback_done(&mut self) {
        if self.phase == Phase::Feedback {
            self.input.clear();
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Scripted;
    use super::*;

    fn watched(puzzle: &mut MemoryPuzzle, rng: &mut Scripted) -> Vec<PlaybackStep> {
        let steps = puzzle.begin(rng).unwrap();
        puzzle.playback_finished();
        steps
    }

    #[test]
    fn first_round_has_three_steps_with_fixed_timing() {
        let mut puzzle = MemoryPuzzle::new();
        let mut rng = Scripted::new(&[0.0, 0.5, 0.99]);
        let steps = watched(&mut puzzle, &mut rng);
        let cells: Vec<_> = steps.iter().map(|s| s.cell).collect();
        assert_eq!(cells, [0, 4, 8]);
        assert!(steps.iter().all(|s| s.on == Duration::from_millis(600)));
        assert!(steps.iter().all(|s| s.total() == Duration::from_millis(800)));
    }

    #[test]
    fn correct_sequence_advances_level_and_awards() {
        let mut puzzle = MemoryPuzzle::new();
        let mut rng = Scripted::new(&[0.2, 0.4, 0.6]);
        watched(&mut puzzle, &mut rng);
        let seq = puzzle.sequence().to_vec();
        assert_eq!(puzzle.tap(seq[0]), TapOutcome::Accepted);
        assert_eq!(puzzle.tap(seq[1]), TapOutcome::Accepted);
        assert_eq!(puzzle.tap(seq[2]), TapOutcome::Correct { award: 20 });
        assert_eq!(puzzle.level(), 2);

        puzzle.feedback_done();
        watched(&mut puzzle, &mut rng);
        assert_eq!(puzzle.sequence().len(), 4);
    }

    #[test]
    fn wrong_sequence_clears_input_without_award() {
        let mut puzzle = MemoryPuzzle::new();
        let mut rng = Scripted::new(&[0.0]);
        watched(&mut puzzle, &mut rng);
        puzzle.tap(0);
        puzzle.tap(0);
        let outcome = puzzle.tap(5);
        assert_eq!(outcome, TapOutcome::Wrong);
        assert_eq!(outcome.award(), None);
        assert!(puzzle.input().is_empty());
        assert_eq!(puzzle.level(), 1);

        puzzle.feedback_done();
        assert_eq!(puzzle.phase(), Phase::Idle);
        assert!(puzzle.begin(&mut rng).is_some());
    }

    #[test]
    fn taps_outside_input_phase_are_ignored() {
        let mut puzzle = MemoryPuzzle::new();
        assert_eq!(puzzle.tap(1), TapOutcome::Ignored);
        let mut rng = Scripted::new(&[0.1]);
        puzzle.begin(&mut rng);
        assert_eq!(puzzle.tap(0), TapOutcome::Ignored);
        assert!(puzzle.begin(&mut rng).is_none());
        puzzle.playback_finished();
        assert_eq!(puzzle.tap(CELL_COUNT), TapOutcome::Ignored);
    }
}
