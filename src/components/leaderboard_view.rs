use yew::prelude::*;

use super::EngineContext;
use crate::engine::leaderboard;

#[function_component(LeaderboardView)]
pub fn leaderboard_view() -> Html {
    let Some(ctx) = use_context::<EngineContext>() else {
        return html! {};
    };
    let rows = leaderboard::standings(ctx.engine().progress().score);
    html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
        <h2 style="margin:0 0 12px 0;">{"Leaderboard"}</h2>
        { for rows.into_iter().map(|row| {
            let highlight = if row.is_player { "background:rgba(88,166,255,0.12);" } else { "" };
            html! {
                <div key={row.rank} style={format!("display:flex; gap:12px; padding:8px 10px; border-bottom:1px solid #21262d; {highlight}")}>
                    <span style="width:28px; opacity:0.7;">{ row.rank }</span>
                    <span style="flex:1;">{ row.name }</span>
                    <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ row.score }</span>
                </div>
            }
        }) }
    </div>}
}
