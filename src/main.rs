//! Omok GUI
//!
//! Two players take turns on one device.

use omok::config::AppConfig;
use omok::ui::OmokApp;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        warn!(%err, "using default config");
        AppConfig::default()
    });

    let size = OmokApp::window_size(&config);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Omok",
        options,
        Box::new(move |cc| Ok(Box::new(OmokApp::new(cc, config)))),
    )
}
