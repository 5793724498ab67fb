use dioxus::prelude::*;

mod ui;

use colloquy_config::Config;
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("colloquy starting up");

    let config = load_config();
    log::info!("API base URL: {}", config.api_base_url);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!(
                "no config file at {}, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            std::process::exit(1);
        }
    }
}

fn app_root() -> Element {
    let config = load_config();

    rsx! {
        App { api_base_url: config.api_base_url }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("colloquy")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
