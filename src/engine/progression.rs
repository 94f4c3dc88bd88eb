use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use super::config::{DEFAULT_LIVES, MAX_LIVES, PLAYER_NAME, XP_MULTIPLIER, XP_PER_LEVEL};

/// Player progress owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressionState {
    pub score: u64,
    /// Always within `0..=MAX_LIVES`.
    pub lives: u8,
    pub xp: u64,
    /// Starts at 1 and only ever increases.
    pub level: u32,
    pub completed_puzzles: u32,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: DEFAULT_LIVES,
            xp: 0,
            level: 1,
            completed_puzzles: 0,
        }
    }
}

impl ProgressionState {
    /// Builds state from a stored record. A level of 0 counts as absent.
    /// Zero lives are kept so a game over saved mid-reset survives a reload.
    pub fn hydrate(record: &ProfileRecord) -> Self {
        let defaults = Self::default();
        Self {
            score: record.score.unwrap_or(defaults.score),
            lives: record
                .lives
                .map(|lives| lives.min(MAX_LIVES))
                .unwrap_or(defaults.lives),
            xp: record.xp.unwrap_or(defaults.xp),
            level: record.level.filter(|&level| level > 0).unwrap_or(defaults.level),
            completed_puzzles: record.completed_puzzles.unwrap_or(defaults.completed_puzzles),
        }
    }

    pub fn to_record(&self, unlocked_puzzles: Vec<String>) -> ProfileRecord {
        ProfileRecord {
            score: Some(self.score),
            lives: Some(self.lives),
            xp: Some(self.xp),
            level: Some(self.level),
            completed_puzzles: Some(self.completed_puzzles),
            name: PLAYER_NAME.to_string(),
            unlocked_puzzles,
        }
    }

    pub fn xp_for_next_level(&self) -> u64 {
        u64::from(self.level).saturating_mul(XP_PER_LEVEL)
    }

    /// Adds a puzzle reward and returns how many levels were gained.
    pub fn record_completion(&mut self, raw_score: u64) -> u32 {
        self.score = self.score.saturating_add(raw_score);
        self.xp = self.xp.saturating_add(raw_score.saturating_mul(XP_MULTIPLIER));
        self.completed_puzzles = self.completed_puzzles.saturating_add(1);

        let mut gained = 0;
        while self.level < u32::MAX && self.xp >= self.xp_for_next_level() {
            self.level += 1;
            self.lives = (self.lives + 1).min(MAX_LIVES);
            gained += 1;
        }
        gained
    }

    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Game-over penalty: lives restored, score halved, level kept.
    pub fn apply_reset_penalty(&mut self) {
        self.lives = DEFAULT_LIVES;
        self.score /= 2;
    }
}

/// Stored shape of the player profile. Each field is read on its own, so one
/// bad value does not discard the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub lives: Option<u8>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub xp: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub completed_puzzles: Option<u32>,
    #[serde(default = "default_name", deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub unlocked_puzzles: Vec<String>,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            score: None,
            lives: None,
            xp: None,
            level: None,
            completed_puzzles: None,
            name: default_name(),
            unlocked_puzzles: Vec::new(),
        }
    }
}

fn default_name() -> String {
    PLAYER_NAME.to_string()
}

/// Reads one field, falling back to `T::default()` when its value has the
/// wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string).unwrap_or_else(default_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrate_empty_record_uses_defaults() {
        let state = ProgressionState::hydrate(&ProfileRecord::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.xp, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.completed_puzzles, 0);
    }

    #[test]
    fn hydrate_keeps_zero_lives_but_not_zero_level() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"score":40,"lives":0,"level":0,"xp":12}"#).unwrap();
        let state = ProgressionState::hydrate(&record);
        assert_eq!(state.lives, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 40);
        assert_eq!(state.xp, 12);
    }

    #[test]
    fn bad_field_defaults_alone() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"score":"lots","lives":4,"xp":-3,"name":7}"#).unwrap();
        assert_eq!(record.score, None);
        assert_eq!(record.xp, None);
        assert_eq!(record.lives, Some(4));
        assert_eq!(record.name, "Neural User");
    }

    #[test]
    fn stored_lives_above_cap_are_clamped() {
        let record: ProfileRecord = serde_json::from_str(r#"{"lives":9}"#).unwrap();
        assert_eq!(ProgressionState::hydrate(&record).lives, 5);
    }

    #[test]
    fn zero_lives_round_trip_through_the_record() {
        let state = ProgressionState {
            score: 100,
            lives: 0,
            ..Default::default()
        };
        let raw = serde_json::to_string(&state.to_record(Vec::new())).unwrap();
        let record: ProfileRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(ProgressionState::hydrate(&record), state);
    }

    #[test]
    fn level_up_at_threshold() {
        let mut state = ProgressionState {
            xp: 95,
            ..Default::default()
        };
        let gained = state.record_completion(10);
        assert_eq!(state.xp, 115);
        assert_eq!(state.score, 10);
        assert_eq!(gained, 1);
        assert_eq!(state.level, 2);
        assert_eq!(state.lives, 4);
    }

    #[test]
    fn large_reward_climbs_several_levels() {
        let mut state = ProgressionState::default();
        // 300 xp clears the 100, 200 and 300 thresholds.
        let gained = state.record_completion(150);
        assert_eq!(state.xp, 300);
        assert_eq!(gained, 3);
        assert_eq!(state.level, 4);
        assert_eq!(state.lives, 5);
    }

    #[test]
    fn lives_never_exceed_cap() {
        let mut state = ProgressionState {
            lives: 5,
            xp: 99,
            ..Default::default()
        };
        state.record_completion(1);
        assert_eq!(state.level, 2);
        assert_eq!(state.lives, 5);
    }

    #[test]
    fn reset_penalty_halves_score_and_keeps_level() {
        let mut state = ProgressionState {
            score: 101,
            lives: 0,
            level: 4,
            ..Default::default()
        };
        state.apply_reset_penalty();
        assert_eq!(state.score, 50);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 4);
    }

    #[test]
    fn lose_life_saturates_at_zero() {
        let mut state = ProgressionState {
            lives: 1,
            ..Default::default()
        };
        assert_eq!(state.lose_life(), 0);
        assert_eq!(state.lose_life(), 0);
    }
}
