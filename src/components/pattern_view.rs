use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::millis;
use crate::puzzles::pattern::{PatternOutcome, FEEDBACK, OPTIONS, SEQUENCE};
use crate::puzzles::PatternQuestion;

#[derive(Properties, PartialEq, Clone)]
pub struct PatternViewProps {
    pub on_complete: Callback<u64>,
}

#[function_component]
pub fn PatternView(props: &PatternViewProps) -> Html {
    let question = use_state(PatternQuestion::new);
    let result = use_state(|| None::<PatternOutcome>);
    let feedback = use_mut_ref(|| None::<Timeout>);

    {
        let feedback = feedback.clone();
        use_effect_with((), move |_| move || drop(feedback.borrow_mut().take()));
    }

    let submit_cb = {
        let question = question.clone();
        let result = result.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| {
            let Some(outcome) = question.submit() else {
                return;
            };
            if let PatternOutcome::Correct { award } = outcome {
                on_complete.emit(award);
            }
            result.set(Some(outcome));
            let hide = result.setter();
            *feedback.borrow_mut() = Some(Timeout::new(millis(FEEDBACK), move || hide.set(None)));
        })
    };

    let sequence = SEQUENCE
        .iter()
        .map(|n| n.to_string())
        .chain(std::iter::once("?".to_string()))
        .map(|item| html! { <span style="min-width:40px; padding:8px 10px; text-align:center; border:1px solid #30363d; border-radius:8px; background:#0d1117; font-weight:600;">{ item }</span> });

    let options = OPTIONS.iter().map(|&option| {
        let onclick = {
            let question = question.clone();
            Callback::from(move |_| {
                let mut next = *question;
                next.select(option);
                question.set(next);
            })
        };
        let border = if question.selected() == Some(option) { "var(--accent)" } else { "#30363d" };
        html! {
            <button key={option} {onclick} style={format!("min-width:56px; padding:8px 12px; border:2px solid {border}; border-radius:8px;")}>{ option }</button>
        }
    });

    html! {<div style="display:flex; flex-direction:column; gap:12px;">
        <p style="margin:0; opacity:0.85;">{"Identify the pattern and select the next element in the sequence."}</p>
        <div style="display:flex; gap:8px; justify-content:center; flex-wrap:wrap;">{ for sequence }</div>
        <div style="display:flex; gap:8px; justify-content:center;">{ for options }</div>
        <div style="display:flex; justify-content:flex-end;">
            <button onclick={submit_cb} disabled={question.selected().is_none()}>{"Submit Answer"}</button>
        </div>
        { match *result {
            Some(PatternOutcome::Correct { .. }) => html! { <div style="color:#3fb950;">{"Pattern identified correctly!"}</div> },
            Some(PatternOutcome::Incorrect) => html! { <div style="color:#f85149;">{"Incorrect pattern identification. Try again."}</div> },
            None => html! {},
        } }
    </div>}
}
