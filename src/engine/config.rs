//! Tunables for the progression engine and the puzzle modules.

use std::time::Duration;

pub const PROFILE_KEY: &str = "brainwarp-user";
pub const SETTINGS_KEY: &str = "brainwarp-settings";
pub const ACHIEVEMENTS_KEY: &str = "brainwarp-achievements";
pub const THEME_KEY: &str = "brainwarp-theme";

/// Relative path the catalog is fetched from.
pub const CATALOG_PATH: &str = "data/brain-levels.json";

pub const PLAYER_NAME: &str = "Neural User";

pub const DEFAULT_LIVES: u8 = 3;
pub const MAX_LIVES: u8 = 5;
/// XP needed per level: `level * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u64 = 100;
pub const XP_MULTIPLIER: u64 = 2;

pub const GAME_OVER_RESET_DELAY: Duration = Duration::from_millis(2000);
pub const HINT_COOLDOWN_SECS: u32 = 30;
pub const PUZZLE_LOAD_DELAY: Duration = Duration::from_millis(1000);
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);
