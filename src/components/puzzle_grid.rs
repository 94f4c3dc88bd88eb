use yew::prelude::*;

use super::EngineContext;
use crate::engine::catalog::PuzzleDifficulty;
use crate::engine::{EngineCommand, PuzzleDefinition};
use crate::state::UiAction;

fn difficulty_color(difficulty: PuzzleDifficulty) -> &'static str {
    match difficulty {
        PuzzleDifficulty::Easy => "#3fb950",
        PuzzleDifficulty::Medium => "#d29922",
        PuzzleDifficulty::Hard => "#f85149",
    }
}

#[function_component(PuzzleGrid)]
pub fn puzzle_grid() -> Html {
    let Some(ctx) = use_context::<EngineContext>() else {
        return html! {};
    };
    let puzzles: Vec<PuzzleDefinition> = ctx.engine().catalog().puzzles().to_vec();

    let cards = puzzles.into_iter().map(|puzzle| {
        let onclick = if puzzle.unlocked {
            let ctx = ctx.clone();
            let id = puzzle.id.clone();
            Some(Callback::from(move |_: MouseEvent| {
                ctx.dispatch.emit(EngineCommand::StartPuzzle(id.clone()));
                let started = ctx.engine().active_puzzle().is_some_and(|p| p.id == id);
                if started {
                    ctx.ui.dispatch(UiAction::OpenPuzzle(id.clone()));
                }
            }))
        } else {
            None
        };
        let card_style = format!(
            "background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px; display:flex; flex-direction:column; gap:8px; {}",
            if puzzle.unlocked { "cursor:pointer;" } else { "opacity:0.45; cursor:not-allowed;" }
        );
        html! {
            <div key={puzzle.id.clone()} style={card_style} {onclick}>
                <div style="font-size:11px; text-transform:uppercase; letter-spacing:1px; opacity:0.7;">{ puzzle.kind.as_str() }</div>
                <h3 style="margin:0; font-size:18px;">{ puzzle.title.clone() }</h3>
                <div style="font-size:13px;">
                    <span style="opacity:0.7;">{"Difficulty: "}</span>
                    <span style={format!("color:{}; font-weight:600;", difficulty_color(puzzle.difficulty))}>{ puzzle.difficulty.as_str() }</span>
                </div>
                <p style="margin:0; font-size:13px; opacity:0.85; flex:1;">{ puzzle.description.clone() }</p>
                { if puzzle.unlocked {
                    html! { <span style="color:#3fb950; font-size:12px;">{"Available"}</span> }
                } else {
                    html! { <span style="color:#8b949e; font-size:12px;">{"Locked"}</span> }
                } }
            </div>
        }
    });

    html! {<div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(200px, 1fr)); gap:16px;">
        { for cards }
    </div>}
}
