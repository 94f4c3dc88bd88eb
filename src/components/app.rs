use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    about_view::AboutView, leaderboard_view::LeaderboardView, millis, nav_bar::NavBar,
    profile_view::ProfileView, puzzle_grid::PuzzleGrid, puzzle_modal::PuzzleModal,
    settings_modal::SettingsModal, start_view::StartView, stats_panel::StatsPanel, toasts::Toasts,
};
use crate::engine::config::NOTIFICATION_TTL;
use crate::engine::theme::Theme;
use crate::engine::{Catalog, EngineCommand, EngineEvent, Notification, ProfileStore, Severity};
use crate::platform::{self, AppEngine, WebStorage};
use crate::state::{UiAction, UiState, View};

/// Shared with every component below the root so they can read the engine and
/// send it commands without prop drilling.
#[derive(Clone)]
pub struct EngineContext {
    pub engine: Rc<RefCell<AppEngine>>,
    pub revision: u64,
    pub dispatch: Callback<EngineCommand>,
    pub ui: UseReducerDispatcher<UiState>,
    pub notify: Callback<Notification>,
}

impl EngineContext {
    pub fn engine(&self) -> Ref<'_, AppEngine> {
        self.engine.borrow()
    }
}

impl PartialEq for EngineContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.engine, &other.engine) && self.revision == other.revision
    }
}

#[derive(Default)]
struct Timers {
    reset: Option<Timeout>,
    ticker: Option<Interval>,
    next_toast: u64,
}

/// Runs engine commands and turns the resulting events into timers, toasts
/// and navigation.
#[derive(Clone)]
struct Driver {
    engine: Rc<RefCell<AppEngine>>,
    ui: UseReducerDispatcher<UiState>,
    timers: Rc<RefCell<Timers>>,
}

impl Driver {
    fn initialize(&self, catalog: Catalog) {
        let result = self.engine.borrow_mut().initialize(catalog);
        if let Err(err) = result {
            log::error!("engine failed to start: {err}");
            self.toast(Notification::new(
                "Storage Error",
                "Saved progress could not be loaded.",
                Severity::Error,
            ));
        }
        self.flush();
    }

    fn run(&self, command: EngineCommand) {
        let result = self.engine.borrow_mut().apply(command);
        if let Err(err) = result {
            log::warn!("engine command rejected: {err}");
        }
        self.flush();
    }

    /// Hint countdown. Only re-renders while the cooldown is visible.
    fn tick(&self) {
        let cooling = !self.engine.borrow().hint_cooldown().is_ready();
        let result = self.engine.borrow_mut().apply(EngineCommand::TickSecond);
        if let Err(err) = result {
            log::warn!("tick rejected: {err}");
        }
        if cooling {
            self.flush();
        }
    }

    fn flush(&self) {
        let events = self.engine.borrow_mut().drain_events();
        for event in events {
            self.route(event);
        }
        self.ui.dispatch(UiAction::Bump);
    }

    fn route(&self, event: EngineEvent) {
        match event {
            EngineEvent::Initialized => self.start_ticker(),
            EngineEvent::Notify(notification) => self.toast(notification),
            EngineEvent::ResetScheduled { delay } => self.schedule_reset(delay),
            EngineEvent::GameReset => {
                self.ui.dispatch(UiAction::ClosePuzzle);
                self.ui.dispatch(UiAction::Navigate(View::Start));
            }
            EngineEvent::PuzzleUnlocked { puzzle_id } => {
                let title = self
                    .engine
                    .borrow()
                    .catalog()
                    .get(&puzzle_id)
                    .map(|p| p.title.clone())
                    .unwrap_or(puzzle_id);
                self.toast(Notification::new(
                    "Puzzle Unlocked",
                    format!("{title} is now available."),
                    Severity::Info,
                ));
            }
            EngineEvent::PuzzleCompleted { puzzle_id, score } => {
                log::debug!("puzzle {puzzle_id} reported {score}");
            }
            EngineEvent::SettingsChanged(patch) => log::debug!("settings changed: {patch:?}"),
        }
    }

    fn toast(&self, notification: Notification) {
        let id = {
            let mut timers = self.timers.borrow_mut();
            timers.next_toast += 1;
            timers.next_toast
        };
        self.ui.dispatch(UiAction::Notify { id, notification });
        let ui = self.ui.clone();
        let expire = Timeout::new(millis(NOTIFICATION_TTL), move || {
            ui.dispatch(UiAction::DismissToast(id))
        });
        let _ = expire.forget();
    }

    fn schedule_reset(&self, delay: Duration) {
        let driver = self.clone();
        let timeout = Timeout::new(millis(delay), move || {
            // Leak our own handle rather than drop it mid-callback.
            if let Some(fired) = driver.timers.borrow_mut().reset.take() {
                let _ = fired.forget();
            }
            driver.run(EngineCommand::ApplyGameOverReset);
        });
        self.timers.borrow_mut().reset = Some(timeout);
    }

    fn start_ticker(&self) {
        if !self.engine.borrow().ticker_running() || self.timers.borrow().ticker.is_some() {
            return;
        }
        let driver = self.clone();
        let interval = Interval::new(1000, move || driver.tick());
        self.timers.borrow_mut().ticker = Some(interval);
    }
}

fn load_theme() -> Theme {
    ProfileStore::new(WebStorage::local())
        .load_theme()
        .unwrap_or_else(|err| {
            log::warn!("theme not loaded: {err}");
            Theme::default()
        })
}

#[function_component(App)]
pub fn app() -> Html {
    let engine = use_mut_ref(|| AppEngine::new(WebStorage::local()));
    let timers = use_mut_ref(Timers::default);
    let ui = use_reducer(UiState::default);
    let theme = use_state(load_theme);

    let driver = Driver {
        engine: engine.clone(),
        ui: ui.dispatcher(),
        timers: timers.clone(),
    };

    // Fetch the catalog once, then hydrate the engine from storage
    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let catalog = Catalog::from_fetch(platform::fetch_catalog().await);
                driver.initialize(catalog);
            });
            || ()
        });
    }

    let dispatch = {
        let driver = driver.clone();
        Callback::from(move |command: EngineCommand| driver.run(command))
    };
    let notify = {
        let driver = driver.clone();
        Callback::from(move |notification: Notification| driver.toast(notification))
    };
    let select_theme = {
        let theme = theme.clone();
        let notify = notify.clone();
        Callback::from(move |picked: Theme| {
            if let Err(err) = ProfileStore::new(WebStorage::local()).save_theme(picked) {
                log::warn!("failed to save theme: {err}");
            }
            theme.set(picked);
            notify.emit(Notification::new(
                "Theme Updated",
                format!("Neural interface theme set to {}", picked.display_name()),
                Severity::Info,
            ));
        })
    };
    let toggle_settings = {
        let ui = ui.dispatcher();
        Callback::from(move |_: ()| ui.dispatch(UiAction::ToggleSettings))
    };
    let dismiss_toast = {
        let ui = ui.dispatcher();
        Callback::from(move |id: u64| ui.dispatch(UiAction::DismissToast(id)))
    };

    let (progress, settings, ready) = {
        let engine = engine.borrow();
        (*engine.progress(), *engine.settings(), engine.is_initialized())
    };

    let ctx = EngineContext {
        engine: engine.clone(),
        revision: ui.revision,
        dispatch,
        ui: ui.dispatcher(),
        notify,
    };

    let current_theme = *theme;
    let (background, accent) = current_theme.palette();
    let mut root_class = classes!("brainwarp", format!("theme-{}", current_theme.as_str()));
    if !settings.particle_effects {
        root_class.push("particles-disabled");
    }
    if settings.reduced_motion {
        root_class.push("reduced-motion");
    }

    let content = if !ready {
        html! { <div style="padding:48px; text-align:center; opacity:0.8;">{"Establishing neural link..."}</div> }
    } else {
        match ui.view {
            View::Start => html! { <StartView /> },
            View::Puzzles => html! { <PuzzleGrid /> },
            View::Profile => html! { <ProfileView /> },
            View::Leaderboard => html! { <LeaderboardView /> },
            View::About => html! { <AboutView /> },
        }
    };

    html! {
        <ContextProvider<EngineContext> context={ctx}>
            <div class={root_class} style={format!("min-height:100vh; background:{background}; color:#e6edf3; font-family:system-ui, sans-serif; --accent:{accent};")}>
                <NavBar current={ui.view} accent={accent} on_open_settings={toggle_settings.clone()} />
                <StatsPanel
                    score={progress.score}
                    lives={progress.lives}
                    level={progress.level}
                    xp={progress.xp}
                    xp_needed={progress.xp_for_next_level()}
                    completed={progress.completed_puzzles}
                />
                <main style="max-width:960px; margin:0 auto; padding:24px 16px;">{ content }</main>
                { match ui.modal.clone() {
                    Some(id) => html! { <PuzzleModal key={id.clone()} puzzle_id={id.clone()} /> },
                    None => html! {},
                } }
                <SettingsModal
                    show={ui.settings_open}
                    theme={current_theme}
                    settings={settings}
                    on_close={toggle_settings}
                    on_select_theme={select_theme}
                />
                <Toasts toasts={ui.toasts.clone()} on_dismiss={dismiss_toast} />
            </div>
        </ContextProvider<EngineContext>>
    }
}
