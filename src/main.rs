mod app;
mod canvas;
mod color;
mod config;
mod constants;
mod constellation;
mod error;
mod frame_loop;
mod input;
mod nebula;
mod particle;
mod pointer;
mod scene;
mod shooting_star;
mod star;
mod surface;
mod viewport;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"starfield: logger already initialized".into());
    }

    leptos::mount::mount_to_body(app::App);
}
