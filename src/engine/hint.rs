use super::catalog::PuzzleType;
use super::config::HINT_COOLDOWN_SECS;

pub const NO_HINT: &str = "No hint available.";

/// Hint text for a puzzle type; `None` gets the generic message.
pub fn hint_for(kind: Option<PuzzleType>) -> &'static str {
    match kind {
        Some(PuzzleType::Memory) => "Focus on the first few cells of the sequence.",
        Some(PuzzleType::Logic) => "Ensure each node connects to the next in the path.",
        Some(PuzzleType::Reflex) => "Stay alert\u{2014}the targets will speed up!",
        Some(PuzzleType::Pattern) => "Look for a mathematical sequence, like Fibonacci.",
        None => NO_HINT,
    }
}

/// `remaining == 0` is the ready state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HintCooldown {
    remaining: u32,
}

impl HintCooldown {
    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Starts cooling if ready. Returns false (and does nothing) while cooling.
    pub fn trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining = HINT_COOLDOWN_SECS;
        true
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn label(&self) -> String {
        if self.is_ready() {
            "Request Hint".to_string()
        } else {
            format!("Hint ({}s)", self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_runs_thirty_ticks() {
        let mut cooldown = HintCooldown::default();
        assert!(cooldown.trigger());
        assert_eq!(cooldown.label(), "Hint (30s)");
        assert!(!cooldown.trigger());
        for _ in 0..29 {
            cooldown.tick();
        }
        assert_eq!(cooldown.label(), "Hint (1s)");
        cooldown.tick();
        assert!(cooldown.is_ready());
        cooldown.tick();
        assert!(cooldown.is_ready());
        assert_eq!(cooldown.label(), "Request Hint");
    }

    #[test]
    fn unknown_type_gets_generic_hint() {
        assert_eq!(hint_for(None), NO_HINT);
        assert!(hint_for(Some(PuzzleType::Pattern)).contains("Fibonacci"));
    }
}
