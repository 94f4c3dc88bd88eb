use std::time::Duration;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::millis;
use crate::platform::JsRandom;
use crate::puzzles::memory::{Phase, TapOutcome, CELL_COUNT, FEEDBACK, TAP_FLASH};
use crate::puzzles::MemoryPuzzle;

#[derive(Properties, PartialEq, Clone)]
pub struct MemoryViewProps {
    pub on_complete: Callback<u64>,
}

#[function_component]
pub fn MemoryView(props: &MemoryViewProps) -> Html {
    let puzzle = use_mut_ref(MemoryPuzzle::new);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let lit = use_state(|| None::<usize>);
    let message = use_state(|| None::<(&'static str, bool)>);
    let redraw = use_force_update();

    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().clear());
    }

    let begin_cb = {
        let puzzle = puzzle.clone();
        let timers = timers.clone();
        let lit = lit.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            let Some(steps) = puzzle.borrow_mut().begin(&mut JsRandom) else {
                return;
            };
            let mut handles = Vec::with_capacity(steps.len() * 2 + 1);
            let mut at = Duration::ZERO;
            for step in steps {
                let on = lit.setter();
                handles.push(Timeout::new(millis(at), move || on.set(Some(step.cell))));
                let off = lit.setter();
                handles.push(Timeout::new(millis(at + step.on), move || off.set(None)));
                at += step.total();
            }
            let finished = puzzle.clone();
            let redraw_done = redraw.clone();
            handles.push(Timeout::new(millis(at), move || {
                finished.borrow_mut().playback_finished();
                redraw_done.force_update();
            }));
            *timers.borrow_mut() = handles;
            redraw.force_update();
        })
    };

    let tap = {
        let puzzle = puzzle.clone();
        let timers = timers.clone();
        let lit = lit.clone();
        let message = message.clone();
        let redraw = redraw.clone();
        let on_complete = props.on_complete.clone();
        move |cell: usize| {
            let outcome = puzzle.borrow_mut().tap(cell);
            match outcome {
                TapOutcome::Ignored => return,
                TapOutcome::Accepted => {}
                TapOutcome::Correct { .. } => {
                    message.set(Some(("Sequence correct! Next level...", true)));
                }
                TapOutcome::Wrong => {
                    message.set(Some(("Sequence incorrect! Try again.", false)));
                }
            }
            if let Some(award) = outcome.award() {
                on_complete.emit(award);
            }
            lit.set(Some(cell));
            let off = lit.setter();
            let mut pending = timers.borrow_mut();
            pending.push(Timeout::new(millis(TAP_FLASH), move || off.set(None)));
            if outcome != TapOutcome::Accepted {
                let puzzle = puzzle.clone();
                let message = message.setter();
                let redraw = redraw.clone();
                pending.push(Timeout::new(millis(FEEDBACK), move || {
                    puzzle.borrow_mut().feedback_done();
                    message.set(None);
                    redraw.force_update();
                }));
            }
        }
    };

    let (phase, level) = {
        let puzzle = puzzle.borrow();
        (puzzle.phase(), puzzle.level())
    };
    let button_label = match phase {
        Phase::Watching => "Watching...",
        Phase::Input => "Repeat Sequence",
        Phase::Idle | Phase::Feedback => "Begin Sequence",
    };

    let cells = (0..CELL_COUNT).map(|cell| {
        let tap = tap.clone();
        let onclick = Callback::from(move |_| tap(cell));
        let background = if *lit == Some(cell) { "var(--accent)" } else { "#21262d" };
        html! {
            <div key={cell} {onclick} style={format!("aspect-ratio:1; border-radius:10px; border:1px solid #30363d; background:{background}; cursor:pointer;")}></div>
        }
    });

    html! {<div style="display:flex; flex-direction:column; gap:12px;">
        <p style="margin:0; opacity:0.85;">{"Memorize the sequence of neural pulses, then repeat it back in the correct order."}</p>
        <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:10px; max-width:300px; margin:0 auto; width:100%;">
            { for cells }
        </div>
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <span>{"Level: "}<strong>{ level }</strong></span>
            <button onclick={begin_cb} disabled={phase != Phase::Idle}>{ button_label }</button>
        </div>
        { match *message {
            Some((text, true)) => html! { <div style="color:#3fb950;">{ text }</div> },
            Some((text, false)) => html! { <div style="color:#f85149;">{ text }</div> },
            None => html! {},
        } }
    </div>}
}
