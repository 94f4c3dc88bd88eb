use serde::{Deserialize, Serialize};

use super::progression::lenient;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    pub particle_effects: bool,
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            sound_enabled: true,
            particle_effects: true,
            reduced_motion: false,
        }
    }
}

/// Partial update; `None` leaves the current value alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub difficulty: Option<Difficulty>,
    pub sound_enabled: Option<bool>,
    pub particle_effects: Option<bool>,
    pub reduced_motion: Option<bool>,
}

impl Settings {
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(sound) = patch.sound_enabled {
            self.sound_enabled = sound;
        }
        if let Some(particles) = patch.particle_effects {
            self.particle_effects = particles;
        }
        if let Some(reduced) = patch.reduced_motion {
            self.reduced_motion = reduced;
        }
    }

    pub fn hydrate(record: &SettingsRecord) -> Self {
        let mut settings = Self::default();
        settings.merge(SettingsPatch {
            difficulty: record.difficulty,
            sound_enabled: record.sound,
            particle_effects: record.particles,
            reduced_motion: record.reduced_motion,
        });
        settings
    }

    pub fn to_record(&self) -> SettingsRecord {
        SettingsRecord {
            sound: Some(self.sound_enabled),
            particles: Some(self.particle_effects),
            reduced_motion: Some(self.reduced_motion),
            difficulty: Some(self.difficulty),
        }
    }
}

/// Stored settings: a flat object of toggles keyed by setting name. A value
/// of the wrong type drops only that toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub particles: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_shallow() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch {
            sound_enabled: Some(false),
            ..Default::default()
        });
        assert!(!settings.sound_enabled);
        assert!(settings.particle_effects);
        assert_eq!(settings.difficulty, Difficulty::Normal);
    }

    #[test]
    fn record_uses_short_key_names() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let json = serde_json::to_value(settings.to_record()).unwrap();
        assert_eq!(json["sound"], true);
        assert_eq!(json["particles"], true);
        assert_eq!(json["reducedMotion"], true);
        assert_eq!(json["difficulty"], "normal");
    }

    #[test]
    fn partial_record_keeps_defaults() {
        let record: SettingsRecord = serde_json::from_str(r#"{"particles":false}"#).unwrap();
        let settings = Settings::hydrate(&record);
        assert!(!settings.particle_effects);
        assert!(settings.sound_enabled);
        assert!(!settings.reduced_motion);
    }

    #[test]
    fn bad_toggle_does_not_discard_the_others() {
        let record: SettingsRecord =
            serde_json::from_str(r#"{"sound":false,"particles":"off","difficulty":"extreme"}"#)
                .unwrap();
        assert_eq!(record.particles, None);
        assert_eq!(record.difficulty, None);
        let settings = Settings::hydrate(&record);
        assert!(!settings.sound_enabled);
        assert!(settings.particle_effects);
        assert_eq!(settings.difficulty, Difficulty::Normal);
    }
}
