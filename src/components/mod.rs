pub mod about_view;
pub mod app;
pub mod leaderboard_view;
pub mod logic_view;
pub mod memory_view;
pub mod nav_bar;
pub mod pattern_view;
pub mod profile_view;
pub mod puzzle_grid;
pub mod puzzle_modal;
pub mod reflex_view;
pub mod settings_modal;
pub mod start_view;
pub mod stats_panel;
pub mod toasts;

use std::time::Duration;

pub use app::{App, EngineContext};

/// Timer delay in the form `gloo` expects.
pub(crate) fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
