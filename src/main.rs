mod app;
mod color;
mod state;
mod ui;

use app::EnergyExplorerApp;
use eframe::egui;
use energy_explorer::config::AppConfig;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e:#}; falling back to default settings");
            AppConfig::default()
        }
    };
    log::info!("settings: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Energy Explorer – ACS Survey Data",
        options,
        Box::new(|_cc| Ok(Box::new(EnergyExplorerApp::new(AppState::new(config))))),
    )
}
