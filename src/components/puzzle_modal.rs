use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::{
    logic_view::LogicView, memory_view::MemoryView, millis, pattern_view::PatternView,
    reflex_view::ReflexView, EngineContext,
};
use crate::engine::config::PUZZLE_LOAD_DELAY;
use crate::engine::{EngineCommand, PuzzleType};
use crate::puzzles::{LoadOutcome, PuzzleLoader};
use crate::state::UiAction;

#[derive(Properties, PartialEq, Clone)]
pub struct PuzzleModalProps {
    pub puzzle_id: AttrValue,
}

#[function_component]
pub fn PuzzleModal(props: &PuzzleModalProps) -> Html {
    let ctx = use_context::<EngineContext>();
    let loader = use_mut_ref(PuzzleLoader::new);
    let pending = use_mut_ref(|| None::<Timeout>);
    let outcome = use_state(|| None::<LoadOutcome>);

    // Simulated load; a newer id replaces the pending one
    {
        let loader = loader.clone();
        let pending = pending.clone();
        let outcome = outcome.clone();
        let engine = ctx.as_ref().map(|c| c.engine.clone());
        use_effect_with(props.puzzle_id.clone(), move |id| {
            outcome.set(None);
            let ticket = loader.borrow_mut().begin(id);
            if let Some(engine) = engine {
                let resolver = loader.clone();
                let timeout = Timeout::new(millis(PUZZLE_LOAD_DELAY), move || {
                    let resolved = resolver.borrow_mut().resolve(&ticket, engine.borrow().catalog());
                    if let Some(resolved) = resolved {
                        outcome.set(Some(resolved));
                    }
                });
                *pending.borrow_mut() = Some(timeout);
            }
            move || {
                loader.borrow_mut().cancel();
                pending.borrow_mut().take();
            }
        });
    }

    let Some(ctx) = ctx else {
        return html! {};
    };

    let close_cb = {
        let ctx = ctx.clone();
        Callback::from(move |_| {
            ctx.dispatch.emit(EngineCommand::ClosePuzzle);
            ctx.ui.dispatch(UiAction::ClosePuzzle);
        })
    };
    let hint_cb = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |_| dispatch.emit(EngineCommand::RequestHint))
    };
    let on_complete = {
        let dispatch = ctx.dispatch.clone();
        let id = props.puzzle_id.to_string();
        Callback::from(move |award: u64| {
            dispatch.emit(EngineCommand::CompletePuzzle {
                puzzle_id: id.clone(),
                score: i64::try_from(award).unwrap_or(i64::MAX),
            })
        })
    };

    let (title, hint_label, hint_ready) = {
        let engine = ctx.engine();
        let title = engine
            .catalog()
            .get(&props.puzzle_id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "Unknown Puzzle".to_string());
        let cooldown = engine.hint_cooldown();
        (title, cooldown.label(), cooldown.is_ready())
    };

    let body = match &*outcome {
        None => html! {
            <div style="padding:40px; text-align:center; opacity:0.8;">{"Initializing neural challenge..."}</div>
        },
        Some(LoadOutcome::NotFound) => html! {
            <div style="padding:40px; text-align:center; color:#f85149;">{"Puzzle not found"}</div>
        },
        Some(LoadOutcome::Ready(def)) => match def.kind {
            PuzzleType::Memory => html! { <MemoryView on_complete={on_complete} /> },
            PuzzleType::Logic => html! { <LogicView on_complete={on_complete} /> },
            PuzzleType::Reflex => html! { <ReflexView on_complete={on_complete} /> },
            PuzzleType::Pattern => html! { <PatternView on_complete={on_complete} /> },
        },
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:40;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; width:min(560px, 94vw); display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                <h3 style="margin:0; font-size:18px;">{ title }</h3>
                <div style="display:flex; gap:8px;">
                    <button onclick={hint_cb} disabled={!hint_ready}>{ hint_label }</button>
                    <button onclick={close_cb}>{"Close"}</button>
                </div>
            </div>
            { body }
        </div>
    </div>}
}
