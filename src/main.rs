mod components;
mod engine;
mod platform;
mod puzzles;
mod state;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger not installed: {err}").into());
    }
    log::info!("brainwarp {}", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
