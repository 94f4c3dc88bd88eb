use yew::prelude::*;

use super::EngineContext;
use crate::engine::achievements::AchievementRecord;
use crate::engine::config::PLAYER_NAME;
use crate::engine::ProfileStore;
use crate::platform::WebStorage;

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let Some(ctx) = use_context::<EngineContext>() else {
        return html! {};
    };
    let achievements: Vec<AchievementRecord> = ProfileStore::new(WebStorage::local())
        .load_achievements()
        .unwrap_or_else(|err| {
            log::warn!("achievements not loaded: {err}");
            Vec::new()
        });
    let progress = *ctx.engine().progress();

    let stat = |label: &'static str, value: String| {
        html! {
            <div style="background:#0d1117; border:1px solid #30363d; border-radius:8px; padding:10px 12px; display:flex; flex-direction:column; gap:2px;">
                <span style="font-size:12px; opacity:0.7;">{ label }</span>
                <span style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">{ value }</span>
            </div>
        }
    };

    html! {<div style="display:flex; flex-direction:column; gap:16px;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
            <h2 style="margin:0 0 12px 0;">{ PLAYER_NAME }</h2>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(120px, 1fr)); gap:10px;">
                { stat("Level", progress.level.to_string()) }
                { stat("XP", format!("{} / {}", progress.xp, progress.xp_for_next_level())) }
                { stat("Score", progress.score.to_string()) }
                { stat("Puzzles Solved", progress.completed_puzzles.to_string()) }
                { stat("Lives", progress.lives.to_string()) }
            </div>
        </div>
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
            <h3 style="margin:0 0 12px 0;">{"Achievements"}</h3>
            { if achievements.is_empty() {
                html! { <div style="opacity:0.7; font-size:14px;">{"No achievements yet."}</div> }
            } else {
                html! { <>{ for achievements.iter().map(|a| html! {
                    <div key={a.title.clone()} style="border-left:3px solid #d4af37; padding:6px 10px; margin-bottom:8px;">
                        <div style="font-weight:600;">{ a.title.clone() }</div>
                        <div style="font-size:13px; opacity:0.85;">{ a.description.clone() }</div>
                        <div style="font-size:11px; opacity:0.6;">{ a.date.get(..10).unwrap_or(a.date.as_str()).to_string() }</div>
                    </div>
                }) }</> }
            } }
        </div>
    </div>}
}
