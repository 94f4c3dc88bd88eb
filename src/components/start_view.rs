use yew::prelude::*;

use super::EngineContext;
use crate::engine::achievements::{AchievementLog, NEURAL_LINK_DESCRIPTION, NEURAL_LINK_TITLE};
use crate::engine::{Notification, ProfileStore, Severity};
use crate::platform::{self, WebStorage};
use crate::state::{UiAction, View};

/// Stores the first-start achievement once and announces it.
fn record_neural_link(notify: &Callback<Notification>) {
    let mut store = ProfileStore::new(WebStorage::local());
    let mut achievements = match store.load_achievements() {
        Ok(records) => AchievementLog::new(records),
        Err(err) => {
            log::warn!("achievements not loaded: {err}");
            return;
        }
    };
    if !achievements.record(NEURAL_LINK_TITLE, NEURAL_LINK_DESCRIPTION, &platform::now_iso()) {
        return;
    }
    if let Err(err) = store.save_achievements(achievements.records()) {
        log::warn!("failed to save achievements: {err}");
    }
    notify.emit(Notification::new(
        format!("Achievement Unlocked: {NEURAL_LINK_TITLE}"),
        NEURAL_LINK_DESCRIPTION,
        Severity::Success,
    ));
}

#[function_component(StartView)]
pub fn start_view() -> Html {
    let Some(ctx) = use_context::<EngineContext>() else {
        return html! {};
    };
    let start_btn = {
        let ui = ctx.ui.clone();
        let notify = ctx.notify.clone();
        Callback::from(move |_| {
            ui.dispatch(UiAction::Navigate(View::Puzzles));
            record_neural_link(&notify);
        })
    };
    let about_btn = {
        let ui = ctx.ui.clone();
        Callback::from(move |_| ui.dispatch(UiAction::Navigate(View::About)))
    };
    html! {
        <div style="margin:48px auto; background:rgba(0,0,0,0.6); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; text-align:center; line-height:1.5;">
            <h1 style="margin:0 0 12px 0; font-size:32px; letter-spacing:4px; color:var(--accent);">{"BRAINWARP"}</h1>
            <p style="margin:4px 0 18px 0; opacity:0.85;">{"Train your mind through a series of neural challenges. Solve puzzles to earn XP, level up and unlock harder circuits."}</p>
            <div style="display:flex; gap:12px; justify-content:center;">
                <button onclick={start_btn} style="padding:10px 22px; font-size:16px;">{"Initiate Neural Link"}</button>
                <button onclick={about_btn} style="padding:10px 22px;">{"About"}</button>
            </div>
        </div>
    }
}
