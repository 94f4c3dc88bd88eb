use yew::prelude::*;

use super::EngineContext;
use crate::engine::settings::Difficulty;
use crate::engine::theme::Theme;
use crate::engine::{EngineCommand, Settings, SettingsPatch};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub theme: Theme,
    pub settings: Settings,
    pub on_close: Callback<()>,
    pub on_select_theme: Callback<Theme>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let ctx = use_context::<EngineContext>();
    if !props.show {
        return html! {};
    }
    let Some(ctx) = ctx else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let patch_cb = |patch: SettingsPatch| {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(EngineCommand::UpdateSettings(patch)))
    };
    let settings = props.settings;
    let toggle_sound_cb = patch_cb(SettingsPatch {
        sound_enabled: Some(!settings.sound_enabled),
        ..Default::default()
    });
    let toggle_particles_cb = patch_cb(SettingsPatch {
        particle_effects: Some(!settings.particle_effects),
        ..Default::default()
    });
    let toggle_motion_cb = patch_cb(SettingsPatch {
        reduced_motion: Some(!settings.reduced_motion),
        ..Default::default()
    });

    let themes = Theme::ALL.iter().map(|&theme| {
        let cb = props.on_select_theme.clone();
        let onclick = Callback::from(move |_| cb.emit(theme));
        let (background, accent) = theme.palette();
        let border = if theme == props.theme { accent } else { "#30363d" };
        html! {
            <button key={theme.as_str()} {onclick} style={format!("flex:1; padding:8px; background:{background}; color:{accent}; border:2px solid {border}; border-radius:8px;")}>
                { theme.display_name() }
            </button>
        }
    });
    let difficulties = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard].map(|difficulty| {
        let onclick = patch_cb(SettingsPatch {
            difficulty: Some(difficulty),
            ..Default::default()
        });
        let label = match difficulty {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        };
        let weight = if difficulty == settings.difficulty { "700" } else { "400" };
        html! { <button key={label} {onclick} style={format!("flex:1; font-weight:{weight};")}>{ label }</button> }
    });

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Neural Interface Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:6px;">
                <span style="font-size:12px; opacity:0.7;">{"Theme"}</span>
                <div style="display:flex; gap:8px;">{ for themes }</div>
            </div>
            <div style="display:flex; flex-direction:column; gap:6px;">
                <span style="font-size:12px; opacity:0.7;">{"Difficulty"}</span>
                <div style="display:flex; gap:8px;">{ for difficulties }</div>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={settings.sound_enabled} onclick={toggle_sound_cb} />
                    <span>{"Sound Effects"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={settings.particle_effects} onclick={toggle_particles_cb} />
                    <span>{"Particle Effects"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={settings.reduced_motion} onclick={toggle_motion_cb} />
                    <span>{"Reduced Motion"}</span>
                </label>
            </div>
            <div style="display:flex; justify-content:flex-end;">
                <button onclick={close_cb}>{"Done"}</button>
            </div>
        </div>
    </div>}
}
