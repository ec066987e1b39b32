mod app;
mod browser;
mod config;
mod net;
mod router;
mod state;
mod ui;
mod validate;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    leptos::mount::mount_to_body(app::App);
}
