use yew::prelude::*;

use crate::state::Toast;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastsProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component]
pub fn Toasts(props: &ToastsProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }
    let items = props.toasts.iter().map(|toast| {
        let close_cb = {
            let cb = props.on_dismiss.clone();
            let id = toast.id;
            Callback::from(move |_| cb.emit(id))
        };
        let note = &toast.notification;
        html! {
            <div key={toast.id} style={format!("background:#161b22; border:1px solid #30363d; border-left:4px solid {}; border-radius:8px; padding:10px 12px; display:flex; gap:10px; align-items:flex-start;", note.severity.accent())}>
                <div style="flex:1;">
                    <div style="font-weight:600; margin-bottom:2px;">{ note.title.clone() }</div>
                    <div style="font-size:13px; opacity:0.85;">{ note.message.clone() }</div>
                </div>
                <button onclick={close_cb} style="padding:0 6px; background:transparent; border:none; color:#8b949e; cursor:pointer;">{"×"}</button>
            </div>
        }
    });
    html! {<div style="position:fixed; right:16px; bottom:16px; width:300px; display:flex; flex-direction:column; gap:8px; z-index:60;">
        { for items }
    </div>}
}
