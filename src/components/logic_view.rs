use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::millis;
use crate::puzzles::logic::{NodeKind, FEEDBACK, GRID_SIZE};
use crate::puzzles::LogicCircuit;

#[derive(Properties, PartialEq, Clone)]
pub struct LogicViewProps {
    pub on_complete: Callback<u64>,
}

#[function_component]
pub fn LogicView(props: &LogicViewProps) -> Html {
    let circuit = use_state(LogicCircuit::new);
    let solved = use_state(|| false);
    let feedback = use_mut_ref(|| None::<Timeout>);

    {
        let feedback = feedback.clone();
        use_effect_with((), move |_| move || drop(feedback.borrow_mut().take()));
    }

    let reset_cb = {
        let circuit = circuit.clone();
        Callback::from(move |_| {
            let mut next = (*circuit).clone();
            next.reset();
            circuit.set(next);
        })
    };
    let verify_cb = {
        let circuit = circuit.clone();
        let solved = solved.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| {
            on_complete.emit(circuit.verify());
            solved.set(true);
            let hide = solved.setter();
            *feedback.borrow_mut() = Some(Timeout::new(millis(FEEDBACK), move || hide.set(false)));
        })
    };

    let nodes = circuit.nodes().iter().enumerate().map(|(index, node)| {
        let onclick = {
            let circuit = circuit.clone();
            Callback::from(move |_| {
                let mut next = (*circuit).clone();
                if next.rotate(index) {
                    circuit.set(next);
                }
            })
        };
        let (label, color) = match node.kind {
            NodeKind::Source => ("IN", "#3fb950"),
            NodeKind::Target => ("OUT", "#f85149"),
            NodeKind::Path => ("━", "var(--accent)"),
        };
        html! {
            <div key={index} {onclick} style={format!("aspect-ratio:1; display:flex; align-items:center; justify-content:center; border:1px solid #30363d; border-radius:10px; background:#0d1117; color:{color}; font-weight:700; cursor:pointer;")}>
                <span style={format!("display:inline-block; transform:rotate({}deg); font-size:22px;", node.rotation)}>{ label }</span>
            </div>
        }
    });

    html! {<div style="display:flex; flex-direction:column; gap:12px;">
        <p style="margin:0; opacity:0.85;">{"Connect the neural pathways to complete the circuit. Click on nodes to rotate connections."}</p>
        <div style={format!("display:grid; grid-template-columns:repeat({GRID_SIZE}, 1fr); gap:8px; max-width:260px; margin:0 auto; width:100%;")}>
            { for nodes }
        </div>
        <div style="display:flex; gap:8px; justify-content:flex-end;">
            <button onclick={reset_cb}>{"Reset Circuit"}</button>
            <button onclick={verify_cb}>{"Verify Circuit"}</button>
        </div>
        { if *solved {
            html! { <div style="color:#3fb950;">{"Circuit complete! Neural pathway established."}</div> }
        } else {
            html! {}
        } }
    </div>}
}
