use std::time::Duration;

pub const SEQUENCE: [u32; 5] = [1, 2, 3, 5, 8];
pub const OPTIONS: [u32; 4] = [11, 12, 13, 14];
pub const ANSWER: u32 = 13;
pub const AWARD: u64 = 75;
pub const FEEDBACK: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternOutcome {
    Correct { award: u64 },
    Incorrect,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternQuestion {
    selected: Option<u32>,
}

impl PatternQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Values outside [`OPTIONS`] are ignored.
    pub fn select(&mut self, option: u32) {
        if OPTIONS.contains(&option) {
            self.selected = Some(option);
        }
    }

    /// `None` when nothing is selected yet.
    pub fn submit(&self) -> Option<PatternOutcome> {
        self.selected.map(|choice| {
            if choice == ANSWER {
                PatternOutcome::Correct { award: AWARD }
            } else {
                PatternOutcome::Incorrect
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_without_selection_does_nothing() {
        assert_eq!(PatternQuestion::new().submit(), None);
    }

    #[test]
    fn thirteen_is_the_only_correct_option() {
        let mut question = PatternQuestion::new();
        for option in OPTIONS {
            question.select(option);
            let expected = if option == 13 {
                PatternOutcome::Correct { award: 75 }
            } else {
                PatternOutcome::Incorrect
            };
            assert_eq!(question.submit(), Some(expected));
        }
    }

    #[test]
    fn unknown_option_keeps_previous_selection() {
        let mut question = PatternQuestion::new();
        question.select(12);
        question.select(99);
        assert_eq!(question.selected(), Some(12));
    }
}
