use yew::prelude::*;

use crate::engine::config::{HINT_COOLDOWN_SECS, MAX_LIVES, XP_MULTIPLIER, XP_PER_LEVEL};

#[function_component(AboutView)]
pub fn about_view() -> Html {
    let cell = "background:#161b22; border:1px solid #30363d; border-radius:10px; padding:14px 16px;";
    html! {
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:14px;">
            <div style={cell}>
                <h3 style="margin:0 0 6px 0;">{"Progression"}</h3>
                <p style="margin:0; font-size:14px; opacity:0.85;">{ format!(
                    "Every point scored earns {XP_MULTIPLIER} XP. A level needs {XP_PER_LEVEL} XP per current level, and each level up restores a life (up to {MAX_LIVES})."
                ) }</p>
            </div>
            <div style={cell}>
                <h3 style="margin:0 0 6px 0;">{"Unlocks"}</h3>
                <p style="margin:0; font-size:14px; opacity:0.85;">{"Completing a puzzle unlocks the next one in the list."}</p>
            </div>
            <div style={cell}>
                <h3 style="margin:0 0 6px 0;">{"Lives"}</h3>
                <p style="margin:0; font-size:14px; opacity:0.85;">{"Mistakes are free: a wrong answer just lets you try again. If your lives ever run out, your score is halved and three lives are restored."}</p>
            </div>
            <div style={cell}>
                <h3 style="margin:0 0 6px 0;">{"Hints"}</h3>
                <p style="margin:0; font-size:14px; opacity:0.85;">{ format!("Hints are available once every {HINT_COOLDOWN_SECS} seconds.") }</p>
            </div>
        </div>
    }
}
