pub mod app;
pub mod config;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    let (level, known) = config.log_level();
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::error!("invalid configuration, using defaults: {:#}", e);
    }
    if !known {
        log::warn!("unknown log level '{}', using debug", config.logging.level);
    }
    log::info!("API base: {}", config.api_base());

    leptos::mount::mount_to_body(move || view_app(config));
}

fn view_app(config: config::AppConfig) -> impl leptos::prelude::IntoView {
    use leptos::prelude::*;
    view! { <app::App config=config /> }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
