//! Reflex round: click a target that keeps jumping around the arena.
//!
//! Every placement gets a new generation. Expiry timers carry the generation
//! they were started for, so a stale timer never moves a newer target.

use std::time::Duration;

use super::RandomSource;

pub const ROUND_SECS: u32 = 30;
pub const TARGET_TIMEOUT: Duration = Duration::from_millis(1500);
pub const REPOSITION_DELAY: Duration = Duration::from_millis(500);
pub const END_MESSAGE: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub target_size: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 300.0,
            target_size: 48.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub active: bool,
    pub generation: u64,
}

/// A placement the caller should arm a [`TARGET_TIMEOUT`] timer for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetSpawn {
    pub generation: u64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReflexRound {
    arena: Arena,
    score: u32,
    time_left: u32,
    playing: bool,
    target: Target,
}

impl Default for ReflexRound {
    fn default() -> Self {
        Self::new(Arena::default())
    }
}

impl ReflexRound {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            score: 0,
            time_left: ROUND_SECS,
            playing: false,
            target: Target::default(),
        }
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Starts a round and places the first target. Ignored while playing.
    pub fn start(&mut self, rng: &mut impl RandomSource) -> Option<TargetSpawn> {
        if self.playing {
            return None;
        }
        self.playing = true;
        self.score = 0;
        self.time_left = ROUND_SECS;
        self.place_target(rng)
    }

    /// Moves the target to a random spot and activates it.
    pub fn place_target(&mut self, rng: &mut impl RandomSource) -> Option<TargetSpawn> {
        if !self.playing {
            return None;
        }
        let max_x = (self.arena.width - self.arena.target_size).max(0.0);
        let max_y = (self.arena.height - self.arena.target_size).max(0.0);
        self.target = Target {
            x: (rng.next_f64() * max_x).floor(),
            y: (rng.next_f64() * max_y).floor(),
            active: true,
            generation: self.target.generation + 1,
        };
        Some(TargetSpawn {
            generation: self.target.generation,
            x: self.target.x,
            y: self.target.y,
        })
    }

    /// Expiry timer for `generation` fired; repositions if that target is
    /// still up and unclicked.
    pub fn target_expired(
        &mut self,
        generation: u64,
        rng: &mut impl RandomSource,
    ) -> Option<TargetSpawn> {
        if !self.target.active || self.target.generation != generation {
            return None;
        }
        self.target.active = false;
        self.place_target(rng)
    }

    /// A click on the target. On success the caller repositions after
    /// [`REPOSITION_DELAY`].
    pub fn hit(&mut self) -> bool {
        if !self.playing || !self.target.active {
            return false;
        }
        self.score += 1;
        self.target.active = false;
        true
    }

    /// One second of the countdown. Returns the final score when the round ends.
    pub fn tick_second(&mut self) -> Option<u32> {
        if !self.playing {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return None;
        }
        self.playing = false;
        self.target.active = false;
        Some(self.score)
    }
}
