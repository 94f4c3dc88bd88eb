use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::millis;
use crate::platform::JsRandom;
use crate::puzzles::reflex::{TargetSpawn, END_MESSAGE, REPOSITION_DELAY, TARGET_TIMEOUT};
use crate::puzzles::ReflexRound;
use crate::util::format_time;

#[derive(Properties, PartialEq, Clone)]
pub struct ReflexViewProps {
    pub on_complete: Callback<u64>,
}

/// Timer plumbing for one mounted round. Fired timeouts stay in `timers`
/// until the next start or unmount so none is dropped inside its own callback.
#[derive(Clone)]
struct RoundTimers {
    round: Rc<RefCell<ReflexRound>>,
    timers: Rc<RefCell<Vec<Timeout>>>,
    redraw: UseForceUpdateHandle,
}

impl RoundTimers {
    fn arm_expiry(&self, spawn: TargetSpawn) {
        let this = self.clone();
        let timeout = Timeout::new(millis(TARGET_TIMEOUT), move || {
            let next = this
                .round
                .borrow_mut()
                .target_expired(spawn.generation, &mut JsRandom);
            if let Some(next) = next {
                this.arm_expiry(next);
                this.redraw.force_update();
            }
        });
        self.timers.borrow_mut().push(timeout);
    }

    fn reposition(&self) {
        let this = self.clone();
        let timeout = Timeout::new(millis(REPOSITION_DELAY), move || {
            let next = this.round.borrow_mut().place_target(&mut JsRandom);
            if let Some(next) = next {
                this.arm_expiry(next);
            }
            this.redraw.force_update();
        });
        self.timers.borrow_mut().push(timeout);
    }
}

#[function_component]
pub fn ReflexView(props: &ReflexViewProps) -> Html {
    let round = use_mut_ref(ReflexRound::default);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let countdown = use_mut_ref(|| None::<Interval>);
    let message = use_state(|| None::<String>);
    let redraw = use_force_update();

    let plumbing = RoundTimers {
        round: round.clone(),
        timers: timers.clone(),
        redraw: redraw.clone(),
    };

    {
        let timers = timers.clone();
        let countdown = countdown.clone();
        use_effect_with((), move |_| {
            move || {
                countdown.borrow_mut().take();
                timers.borrow_mut().clear();
            }
        });
    }

    let start_cb = {
        let plumbing = plumbing.clone();
        let countdown = countdown.clone();
        let message = message.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| {
            let Some(spawn) = plumbing.round.borrow_mut().start(&mut JsRandom) else {
                return;
            };
            plumbing.timers.borrow_mut().clear();
            plumbing.arm_expiry(spawn);
            message.set(None);

            let ticker = plumbing.clone();
            let message = message.clone();
            let on_complete = on_complete.clone();
            let interval = Interval::new(1000, move || {
                if !ticker.round.borrow().is_playing() {
                    return;
                }
                let finished = ticker.round.borrow_mut().tick_second();
                ticker.redraw.force_update();
                if let Some(score) = finished {
                    on_complete.emit(u64::from(score));
                    message.set(Some(format!("Challenge complete! Final score: {score}")));
                    let hide = message.setter();
                    ticker
                        .timers
                        .borrow_mut()
                        .push(Timeout::new(millis(END_MESSAGE), move || hide.set(None)));
                }
            });
            *countdown.borrow_mut() = Some(interval);
            plumbing.redraw.force_update();
        })
    };

    let hit_cb = {
        let plumbing = plumbing.clone();
        Callback::from(move |_| {
            let hit = plumbing.round.borrow_mut().hit();
            if hit {
                plumbing.reposition();
                plumbing.redraw.force_update();
            }
        })
    };

    let state = round.borrow().clone();
    let arena = state.arena();
    let target = state.target();

    html! {<div style="display:flex; flex-direction:column; gap:12px;">
        <p style="margin:0; opacity:0.85;">{"Click on the neural nodes as quickly as possible when they activate."}</p>
        <div style={format!("position:relative; width:{}px; height:{}px; max-width:100%; margin:0 auto; background:#0d1117; border:1px solid #30363d; border-radius:10px; overflow:hidden;", arena.width, arena.height)}>
            { if target.active {
                html! {
                    <div onclick={hit_cb} style={format!("position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; border-radius:50%; background:var(--accent); box-shadow:0 0 12px var(--accent); cursor:pointer;", target.x, target.y, arena.target_size, arena.target_size)}></div>
                }
            } else {
                html! {}
            } }
        </div>
        <div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
            <span>{"Score: "}<strong>{ state.score() }</strong></span>
            <span>{"Time: "}<strong>{ format_time(u64::from(state.time_left())) }</strong></span>
            <button onclick={start_cb} disabled={state.is_playing()}>{"Start Challenge"}</button>
        </div>
        { match &*message {
            Some(text) => html! { <div style="color:#3fb950;">{ text.clone() }</div> },
            None => html! {},
        } }
    </div>}
}
