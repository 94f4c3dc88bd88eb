//! Progression engine: score, lives, XP, levels and puzzle unlocks.
//!
//! The engine has no knowledge of the page. It is driven through plain method
//! calls (or [`EngineCommand`]s) and reports back through a queue of
//! [`EngineEvent`]s that the presentation drains after every call.

pub mod achievements;
pub mod catalog;
pub mod config;
pub mod events;
pub mod hint;
pub mod leaderboard;
pub mod progression;
pub mod settings;
pub mod store;
pub mod theme;

use std::time::Duration;

use thiserror::Error;

pub use catalog::{Catalog, CatalogError, PuzzleDefinition, PuzzleType};
pub use events::{EngineEvent, Notification, Severity};
pub use progression::ProgressionState;
pub use settings::{Settings, SettingsPatch};
pub use store::{KeyValueStore, ProfileStore, StoreError};

use config::{GAME_OVER_RESET_DELAY, MAX_LIVES};
use hint::HintCooldown;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine is not initialized")]
    NotInitialized,
    #[error("puzzle score must not be negative (got {0})")]
    InvalidScore(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Every mutation the presentation may request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineCommand {
    StartPuzzle(String),
    ClosePuzzle,
    CompletePuzzle { puzzle_id: String, score: i64 },
    /// Engine surface only; no puzzle costs a life in play.
    #[allow(dead_code)]
    LoseLife,
    ApplyGameOverReset,
    UpdateSettings(SettingsPatch),
    RequestHint,
    TickSecond,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub levels_gained: u32,
    pub unlocked: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeLoss {
    Remaining(u8),
    GameOver { reset_in: Duration },
}

pub struct Engine<S> {
    store: ProfileStore<S>,
    catalog: Catalog,
    progress: ProgressionState,
    settings: Settings,
    hint: HintCooldown,
    initialized: bool,
    ticker_running: bool,
    active_puzzle: Option<String>,
    reset_pending: bool,
    events: Vec<EngineEvent>,
}

impl<S: KeyValueStore> Engine<S> {
    pub fn new(backend: S) -> Self {
        Self {
            store: ProfileStore::new(backend),
            catalog: Catalog::new(Vec::new()),
            progress: ProgressionState::default(),
            settings: Settings::default(),
            hint: HintCooldown::default(),
            initialized: false,
            ticker_running: false,
            active_puzzle: None,
            reset_pending: false,
            events: Vec::new(),
        }
    }

    /// Hydrates state and starts the hint ticker. Returns `Ok(false)` when the
    /// engine was already initialized. A profile saved with zero lives was
    /// closed during a game over, so its reset is scheduled again.
    pub fn initialize(&mut self, mut catalog: Catalog) -> Result<bool, EngineError> {
        if self.initialized {
            return Ok(false);
        }
        let (profile, settings) = match self
            .store
            .load_profile()
            .and_then(|p| Ok((p, self.store.load_settings()?)))
        {
            Ok(loaded) => loaded,
            Err(err) => {
                log::error!("failed to initialize engine: {err}");
                return Err(err.into());
            }
        };
        catalog.restore_unlocks(&profile.unlocked_puzzles);
        self.catalog = catalog;
        self.progress = ProgressionState::hydrate(&profile);
        self.settings = Settings::hydrate(&settings);
        self.ticker_running = true;
        self.initialized = true;
        log::info!(
            "engine initialized: {} puzzles, level {}, {} lives",
            self.catalog.len(),
            self.progress.level,
            self.progress.lives
        );
        self.events.push(EngineEvent::Initialized);
        if self.progress.lives == 0 {
            log::info!("resuming game over reset from stored profile");
            self.reset_pending = true;
            self.events.push(EngineEvent::ResetScheduled {
                delay: GAME_OVER_RESET_DELAY,
            });
        }
        Ok(true)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn progress(&self) -> &ProgressionState {
        &self.progress
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn hint_cooldown(&self) -> &HintCooldown {
        &self.hint
    }

    /// True once initialized; the presentation drives `tick_second` while set.
    pub fn ticker_running(&self) -> bool {
        self.ticker_running
    }

    #[cfg(test)]
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    #[cfg(test)]
    pub fn store(&self) -> &ProfileStore<S> {
        &self.store
    }

    pub fn active_puzzle(&self) -> Option<&PuzzleDefinition> {
        self.active_puzzle.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn apply(&mut self, command: EngineCommand) -> Result<(), EngineError> {
        match command {
            EngineCommand::StartPuzzle(id) => {
                self.start_puzzle(&id);
            }
            EngineCommand::ClosePuzzle => self.close_puzzle(),
            EngineCommand::CompletePuzzle { puzzle_id, score } => {
                self.complete_puzzle(&puzzle_id, score)?;
            }
            EngineCommand::LoseLife => {
                self.lose_life()?;
            }
            EngineCommand::ApplyGameOverReset => {
                self.apply_game_over_reset();
            }
            EngineCommand::UpdateSettings(patch) => self.update_settings(patch)?,
            EngineCommand::RequestHint => {
                self.request_hint();
            }
            EngineCommand::TickSecond => self.tick_second(),
        }
        Ok(())
    }

    /// Marks an unlocked puzzle as the one being played.
    pub fn start_puzzle(&mut self, id: &str) -> Option<&PuzzleDefinition> {
        if !self.initialized {
            return None;
        }
        let puzzle = self.catalog.get(id).filter(|p| p.unlocked)?;
        log::info!("starting puzzle: {}", puzzle.title);
        self.active_puzzle = Some(puzzle.id.clone());
        self.catalog.get(id)
    }

    pub fn close_puzzle(&mut self) {
        self.active_puzzle = None;
    }

    /// Applies a puzzle reward. Unknown ids are ignored (`Ok(None)`).
    pub fn complete_puzzle(
        &mut self,
        puzzle_id: &str,
        raw_score: i64,
    ) -> Result<Option<Completion>, EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        let Some(puzzle) = self.catalog.get(puzzle_id) else {
            log::debug!("ignoring completion of unknown puzzle {puzzle_id}");
            return Ok(None);
        };
        let score = u64::try_from(raw_score).map_err(|_| EngineError::InvalidScore(raw_score))?;
        log::info!("completed puzzle: {} with score: {score}", puzzle.title);

        let start_level = self.progress.level;
        let levels_gained = self.progress.record_completion(score);
        for level in start_level + 1..=start_level + levels_gained {
            self.notify(
                "Level Up!",
                format!("You've reached Level {level}!"),
                Severity::Success,
            );
        }

        let unlocked = self.catalog.unlock_after(puzzle_id);
        if let Some(next) = &unlocked {
            log::info!("unlocked new puzzle: {next}");
            self.events.push(EngineEvent::PuzzleUnlocked {
                puzzle_id: next.clone(),
            });
        }

        self.persist_progress();
        self.events.push(EngineEvent::PuzzleCompleted {
            puzzle_id: puzzle_id.to_string(),
            score,
        });
        Ok(Some(Completion {
            levels_gained,
            unlocked,
        }))
    }

    /// Removes a life. At zero lives a delayed reset is scheduled through
    /// [`EngineEvent::ResetScheduled`].
    pub fn lose_life(&mut self) -> Result<LifeLoss, EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        let remaining = self.progress.lose_life();
        self.persist_progress();
        if remaining > 0 {
            self.notify(
                "Life Lost",
                format!("You have {remaining} lives remaining."),
                Severity::Error,
            );
            return Ok(LifeLoss::Remaining(remaining));
        }
        self.notify(
            "Game Over",
            "You've run out of lives. Resetting...",
            Severity::Error,
        );
        if !self.reset_pending {
            self.reset_pending = true;
            self.events.push(EngineEvent::ResetScheduled {
                delay: GAME_OVER_RESET_DELAY,
            });
        }
        Ok(LifeLoss::GameOver {
            reset_in: GAME_OVER_RESET_DELAY,
        })
    }

    /// Second half of a game over, run when the reset timer fires. State may
    /// have moved on since it was scheduled, so it is checked again here: the
    /// penalty only applies if lives are still at zero.
    pub fn apply_game_over_reset(&mut self) -> bool {
        if !std::mem::take(&mut self.reset_pending) {
            return false;
        }
        if self.progress.lives > 0 {
            log::info!("game over reset skipped, lives recovered to {}", self.progress.lives);
            return false;
        }
        self.progress.apply_reset_penalty();
        self.active_puzzle = None;
        self.persist_progress();
        self.events.push(EngineEvent::GameReset);
        true
    }

    /// Queues a hint for the active puzzle unless the cooldown is running.
    pub fn request_hint(&mut self) -> Option<&'static str> {
        if !self.initialized || !self.hint.trigger() {
            return None;
        }
        let message = hint::hint_for(self.active_puzzle().map(|p| p.kind));
        self.notify("Hint", message, Severity::Info);
        Some(message)
    }

    pub fn tick_second(&mut self) {
        if self.ticker_running {
            self.hint.tick();
        }
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        self.settings.merge(patch);
        log::debug!("settings updated: {:?}", self.settings);
        if let Err(err) = self.store.save_settings(&self.settings.to_record()) {
            log::warn!("failed to save settings: {err}");
        }
        self.events.push(EngineEvent::SettingsChanged(patch));
        Ok(())
    }

    fn persist_progress(&mut self) {
        debug_assert!(self.progress.lives <= MAX_LIVES);
        let record = self.progress.to_record(self.catalog.unlocked_ids());
        if let Err(err) = self.store.save_profile(&record) {
            log::warn!("failed to save profile: {err}");
        }
    }

    fn notify(&mut self, title: &str, message: impl Into<String>, severity: Severity) {
        self.events
            .push(EngineEvent::Notify(Notification::new(title, message, severity)));
    }
}

#[cfg(test)]
mod tests {
    use super::catalog::PuzzleDifficulty;
    use super::config::PROFILE_KEY;
    use super::store::MemoryStore;
    use super::*;

    fn ready_engine() -> Engine<MemoryStore> {
        let mut engine = Engine::new(MemoryStore::new());
        engine.initialize(Catalog::fallback()).unwrap();
        engine.drain_events();
        engine
    }

    fn engine_with(progress: ProgressionState) -> Engine<MemoryStore> {
        let mut engine = ready_engine();
        engine.progress = progress;
        engine
    }

    fn abc_catalog() -> Catalog {
        let def = |id: &str, unlocked| PuzzleDefinition {
            id: id.to_string(),
            kind: PuzzleType::Memory,
            title: id.to_uppercase(),
            difficulty: PuzzleDifficulty::Easy,
            description: String::new(),
            unlocked,
        };
        Catalog::new(vec![def("a", true), def("b", false), def("c", false)])
    }

    fn notifications(events: &[EngineEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::Notify(n) => Some(n.title.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_store_hydrates_defaults() {
        let mut engine = Engine::new(MemoryStore::new());
        assert!(engine.initialize(Catalog::fallback()).unwrap());
        assert_eq!(*engine.progress(), ProgressionState::default());
        assert_eq!(engine.progress().lives, 3);
        assert_eq!(engine.progress().level, 1);
        assert_eq!(*engine.settings(), Settings::default());
        assert!(engine.ticker_running());
        assert_eq!(engine.drain_events(), vec![EngineEvent::Initialized]);
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut backend = MemoryStore::new();
        backend.set(PROFILE_KEY, r#"{"score":7}"#).unwrap();
        let mut engine = Engine::new(backend);
        assert!(engine.initialize(Catalog::fallback()).unwrap());
        engine.complete_puzzle("memory-1", 3).unwrap();
        engine.drain_events();

        assert!(!engine.initialize(abc_catalog()).unwrap());
        assert_eq!(engine.progress().score, 10);
        assert_eq!(engine.catalog().len(), 4);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn calls_before_initialize_do_nothing() {
        let mut engine = Engine::new(MemoryStore::new());
        assert!(matches!(
            engine.complete_puzzle("memory-1", 10),
            Err(EngineError::NotInitialized)
        ));
        assert!(engine.start_puzzle("memory-1").is_none());
        assert!(engine.request_hint().is_none());
        engine.tick_second();
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn completion_levels_up_and_adds_a_life() {
        let mut engine = engine_with(ProgressionState {
            xp: 95,
            ..Default::default()
        });
        let done = engine.complete_puzzle("memory-1", 10).unwrap().unwrap();
        assert_eq!(done.levels_gained, 1);
        let p = engine.progress();
        assert_eq!((p.xp, p.level, p.lives, p.score, p.completed_puzzles), (115, 2, 4, 10, 1));
        let events = engine.drain_events();
        assert_eq!(notifications(&events), ["Level Up!"]);
        assert_eq!(
            events.last(),
            Some(&EngineEvent::PuzzleCompleted {
                puzzle_id: "memory-1".into(),
                score: 10
            })
        );
    }

    #[test]
    fn level_up_never_exceeds_five_lives() {
        let mut engine = engine_with(ProgressionState {
            lives: 5,
            xp: 199,
            level: 2,
            ..Default::default()
        });
        engine.complete_puzzle("logic-1", 1).unwrap();
        assert_eq!(engine.progress().level, 3);
        assert_eq!(engine.progress().lives, 5);
    }

    #[test]
    fn unlock_cascade_unlocks_only_the_next_entry() {
        let mut engine = Engine::new(MemoryStore::new());
        engine.initialize(abc_catalog()).unwrap();

        let done = engine.complete_puzzle("a", 5).unwrap().unwrap();
        assert_eq!(done.unlocked.as_deref(), Some("b"));
        assert!(engine.catalog().get("b").unwrap().unlocked);
        assert!(!engine.catalog().get("c").unwrap().unlocked);

        let done = engine.complete_puzzle("b", 5).unwrap().unwrap();
        assert_eq!(done.unlocked.as_deref(), Some("c"));
        assert!(engine.catalog().get("c").unwrap().unlocked);
        assert!(
            engine
                .drain_events()
                .contains(&EngineEvent::PuzzleUnlocked { puzzle_id: "c".into() })
        );
    }

    #[test]
    fn unknown_puzzle_is_a_no_op() {
        let mut engine = ready_engine();
        let before = *engine.progress();
        assert!(engine.complete_puzzle("nonexistent", 50).unwrap().is_none());
        assert_eq!(*engine.progress(), before);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn negative_score_is_rejected_without_changes() {
        let mut engine = ready_engine();
        let before = *engine.progress();
        assert!(matches!(
            engine.complete_puzzle("memory-1", -5),
            Err(EngineError::InvalidScore(-5))
        ));
        assert_eq!(*engine.progress(), before);
    }

    #[test]
    fn last_life_schedules_reset_with_penalty() {
        let mut engine = engine_with(ProgressionState {
            lives: 1,
            score: 100,
            ..Default::default()
        });
        let outcome = engine.lose_life().unwrap();
        assert_eq!(
            outcome,
            LifeLoss::GameOver {
                reset_in: Duration::from_millis(2000)
            }
        );
        assert_eq!(engine.progress().lives, 0);
        let events = engine.drain_events();
        assert_eq!(notifications(&events), ["Game Over"]);
        assert!(events.contains(&EngineEvent::ResetScheduled {
            delay: Duration::from_millis(2000)
        }));

        assert!(engine.apply_game_over_reset());
        assert_eq!(engine.progress().lives, 3);
        assert_eq!(engine.progress().score, 50);
        assert_eq!(engine.drain_events(), vec![EngineEvent::GameReset]);
        assert!(!engine.apply_game_over_reset());
    }

    #[test]
    fn losing_a_life_with_lives_left_only_notifies() {
        let mut engine = ready_engine();
        assert_eq!(engine.lose_life().unwrap(), LifeLoss::Remaining(2));
        let events = engine.drain_events();
        assert_eq!(notifications(&events), ["Life Lost"]);
        assert!(!engine.reset_pending());
    }

    #[test]
    fn repeated_game_over_schedules_one_reset() {
        let mut engine = engine_with(ProgressionState {
            lives: 1,
            ..Default::default()
        });
        engine.lose_life().unwrap();
        engine.lose_life().unwrap();
        assert_eq!(engine.progress().lives, 0);
        let scheduled = engine
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, EngineEvent::ResetScheduled { .. }))
            .count();
        assert_eq!(scheduled, 1);
    }

    #[test]
    fn reset_uses_score_earned_during_the_delay() {
        let mut engine = engine_with(ProgressionState {
            lives: 1,
            score: 100,
            level: 5,
            ..Default::default()
        });
        engine.lose_life().unwrap();
        engine.complete_puzzle("memory-1", 20).unwrap();
        assert!(engine.apply_game_over_reset());
        assert_eq!(engine.progress().score, 60);
        assert_eq!(engine.progress().level, 5);
    }

    #[test]
    fn reset_is_skipped_when_a_level_up_restored_a_life() {
        let mut engine = engine_with(ProgressionState {
            lives: 1,
            score: 100,
            xp: 90,
            ..Default::default()
        });
        engine.lose_life().unwrap();
        engine.complete_puzzle("memory-1", 10).unwrap();
        assert_eq!(engine.progress().lives, 1);
        assert!(!engine.apply_game_over_reset());
        assert_eq!(engine.progress().score, 110);
        assert!(!engine.reset_pending());
    }

    #[test]
    fn progress_and_unlocks_survive_a_reload() {
        let mut engine = engine_with(ProgressionState {
            score: 42,
            lives: 4,
            xp: 84,
            level: 1,
            completed_puzzles: 3,
        });
        engine.complete_puzzle("reflex-1", 12).unwrap();
        let saved = *engine.progress();

        let mut reloaded = Engine::new(engine.store().backend().clone());
        reloaded.initialize(Catalog::fallback()).unwrap();
        assert_eq!(*reloaded.progress(), saved);
        assert!(reloaded.catalog().get("pattern-1").unwrap().unlocked);
    }

    #[test]
    fn start_puzzle_requires_unlocked_entry() {
        let mut engine = ready_engine();
        assert!(engine.start_puzzle("pattern-1").is_none());
        assert!(engine.active_puzzle().is_none());
        assert_eq!(engine.start_puzzle("logic-1").unwrap().kind, PuzzleType::Logic);
        assert_eq!(engine.active_puzzle().unwrap().id, "logic-1");
        engine.close_puzzle();
        assert!(engine.active_puzzle().is_none());
    }

    #[test]
    fn hint_cools_down_for_thirty_ticks() {
        let mut engine = ready_engine();
        engine.start_puzzle("memory-1");
        assert_eq!(
            engine.request_hint(),
            Some("Focus on the first few cells of the sequence.")
        );
        assert_eq!(notifications(&engine.drain_events()), ["Hint"]);
        assert_eq!(engine.request_hint(), None);
        for _ in 0..30 {
            engine.apply(EngineCommand::TickSecond).unwrap();
        }
        assert!(engine.hint_cooldown().is_ready());
        engine.close_puzzle();
        assert_eq!(engine.request_hint(), Some(hint::NO_HINT));
    }

    #[test]
    fn settings_merge_and_persist() {
        let mut engine = ready_engine();
        let patch = SettingsPatch {
            sound_enabled: Some(false),
            ..Default::default()
        };
        engine.apply(EngineCommand::UpdateSettings(patch)).unwrap();
        assert!(!engine.settings().sound_enabled);
        assert!(engine.settings().particle_effects);
        assert_eq!(engine.drain_events(), vec![EngineEvent::SettingsChanged(patch)]);

        let mut reloaded = Engine::new(engine.store().backend().clone());
        reloaded.initialize(Catalog::fallback()).unwrap();
        assert!(!reloaded.settings().sound_enabled);
    }

    #[test]
    fn commands_route_to_operations() {
        let mut engine = ready_engine();
        engine
            .apply(EngineCommand::CompletePuzzle {
                puzzle_id: "pattern-1".into(),
                score: 75,
            })
            .unwrap();
        assert_eq!(engine.progress().level, 2);
        engine.apply(EngineCommand::LoseLife).unwrap();
        assert_eq!(engine.progress().lives, 3);
        let rejected = engine.apply(EngineCommand::CompletePuzzle {
            puzzle_id: "memory-1".into(),
            score: -1,
        });
        assert!(rejected.is_err());
    }

    #[test]
    fn game_over_survives_a_reload_and_still_resets() {
        let mut engine = engine_with(ProgressionState {
            lives: 1,
            score: 100,
            ..Default::default()
        });
        engine.lose_life().unwrap();
        let saved = *engine.progress();
        assert_eq!(saved.lives, 0);

        let mut reloaded = Engine::new(engine.store().backend().clone());
        reloaded.initialize(Catalog::fallback()).unwrap();
        assert_eq!(*reloaded.progress(), saved);
        assert!(reloaded.reset_pending());
        assert_eq!(
            reloaded.drain_events(),
            vec![
                EngineEvent::Initialized,
                EngineEvent::ResetScheduled {
                    delay: Duration::from_millis(2000)
                },
            ]
        );

        assert!(reloaded.apply_game_over_reset());
        assert_eq!(reloaded.progress().lives, 3);
        assert_eq!(reloaded.progress().score, 50);
    }

    #[test]
    fn game_reset_closes_the_active_puzzle() {
        let mut engine = engine_with(ProgressionState {
            lives: 1,
            ..Default::default()
        });
        engine.start_puzzle("memory-1");
        engine.lose_life().unwrap();
        assert!(engine.active_puzzle().is_some());
        assert!(engine.apply_game_over_reset());
        assert!(engine.active_puzzle().is_none());
    }

    #[test]
    fn wrong_memory_sequence_costs_nothing_and_retry_scores() {
        use crate::puzzles::MemoryPuzzle;
        use crate::puzzles::memory::TapOutcome;
        use crate::puzzles::testing::Scripted;

        let mut engine = ready_engine();
        engine.start_puzzle("memory-1");
        let before = *engine.progress();
        let mut puzzle = MemoryPuzzle::new();
        let mut rng = Scripted::new(&[0.0]);

        puzzle.begin(&mut rng).unwrap();
        puzzle.playback_finished();
        puzzle.tap(0);
        puzzle.tap(0);
        let outcome = puzzle.tap(4);
        assert_eq!(outcome, TapOutcome::Wrong);
        assert_eq!(outcome.award(), None);
        assert_eq!(*engine.progress(), before);
        assert!(engine.drain_events().is_empty());

        puzzle.feedback_done();
        puzzle.begin(&mut rng).unwrap();
        puzzle.playback_finished();
        puzzle.tap(0);
        puzzle.tap(0);
        let award = puzzle.tap(0).award().unwrap();
        engine
            .apply(EngineCommand::CompletePuzzle {
                puzzle_id: "memory-1".into(),
                score: award as i64,
            })
            .unwrap();
        assert_eq!(engine.progress().score, before.score + award);
        assert_eq!(engine.progress().lives, before.lives);
    }
}
