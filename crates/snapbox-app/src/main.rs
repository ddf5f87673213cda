//! Main application entry point.

use snapbox_app::{App, AppConfig, AppError};

fn main() {
    env_logger::init();
    log::info!("Starting SnapBox");

    // An explicit config path must load; otherwise fall back to SNAPBOX_CONFIG
    let config = match std::env::args_os().nth(1) {
        Some(path) => AppConfig::load(path).map_err(AppError::from),
        None => Ok(AppConfig::from_env()),
    };

    let result = config.and_then(|config| pollster::block_on(App::with_config(config).run()));
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
