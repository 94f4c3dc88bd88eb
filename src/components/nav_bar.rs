use yew::prelude::*;

use super::EngineContext;
use crate::state::{UiAction, View};

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub current: View,
    pub accent: AttrValue,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    let Some(ctx) = use_context::<EngineContext>() else {
        return html! {};
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let buttons = View::NAV.iter().map(|&view| {
        let ui = ctx.ui.clone();
        let onclick = Callback::from(move |_| ui.dispatch(UiAction::Navigate(view)));
        let active = view == props.current;
        let style = if active {
            format!("background:transparent; border:1px solid {}; color:{}; padding:6px 12px; border-radius:16px;", props.accent, props.accent)
        } else {
            "background:transparent; border:1px solid #30363d; color:#c9d1d9; padding:6px 12px; border-radius:16px;".to_string()
        };
        html! { <button key={view.label()} {onclick} {style}>{ view.label() }</button> }
    });
    html! {<nav style="display:flex; align-items:center; gap:8px; padding:12px 16px; border-bottom:1px solid #30363d; background:rgba(22,27,34,0.9);">
        <span style={format!("font-weight:700; letter-spacing:2px; margin-right:16px; color:{};", props.accent)}>{"BRAINWARP"}</span>
        { for buttons }
        <span style="flex:1;"></span>
        <button onclick={settings_cb} style="padding:6px 12px;">{"Settings"}</button>
    </nav>}
}
