use std::time::Duration;

use super::settings::SettingsPatch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn accent(self) -> &'static str {
        match self {
            Severity::Info => "#58a6ff",
            Severity::Success => "#3fb950",
            Severity::Error => "#f85149",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Fire-and-forget events queued by the engine for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    Initialized,
    PuzzleCompleted { puzzle_id: String, score: u64 },
    PuzzleUnlocked { puzzle_id: String },
    Notify(Notification),
    /// The presentation must call back `apply_game_over_reset` after `delay`.
    ResetScheduled { delay: Duration },
    /// Game-over penalty applied; grid re-renders and the start view shows.
    GameReset,
    SettingsChanged(SettingsPatch),
}
