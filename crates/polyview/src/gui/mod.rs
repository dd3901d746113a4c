use std::error::Error;

use app::App;
use crossbeam::channel;
use egui::Color32;

use crate::config::Config;

mod app;
pub mod log;
mod util;

const ERROR_COLOR: Color32 = Color32::from_rgb(197, 15, 31);
const WARN_COLOR: Color32 = Color32::from_rgb(193, 156, 0);
const INFO_COLOR: Color32 = Color32::from_rgb(58, 150, 221);
const DEBUG_COLOR: Color32 = Color32::from_rgb(136, 23, 152);

pub fn run() -> Result<(), Box<dyn Error>> {
    let (log_tx, log_rx) = channel::unbounded();
    log::LoggerBuilder::new()
        .sender(log_tx)
        .with_level(::log::LevelFilter::Debug)
        .build()?
        .init()?;

    let config_path = Config::default_path();
    let config = Config::load_or_create(&config_path);

    if let Some(dir) = config_path.parent() {
        let _ = panic_log::set_path(dir.join(panic_log::DEFAULT_PATH));
    }

    ::log::info!("Using config {}", config_path.display());

    let options = eframe::NativeOptions {
        initial_window_size: Some([config.window.width, config.window.height].into()),
        ..Default::default()
    };

    eframe::run_native(
        concat!("polyview | v", env!("CARGO_PKG_VERSION")),
        options,
        Box::new(move |_cc| Box::new(App::new(config, config_path, log_rx))),
    );

    Ok(())
}
