mod app;
mod io;
mod model;

use app::DesktopApp;
use neural_detect::Config;

fn main() -> eframe::Result<()> {
    neural_detect::init_tracing(false);

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("config load failed, using defaults: {err}");
        Config::default()
    });

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "NeuralDetect",
        options,
        Box::new(move |_cc| Box::new(DesktopApp::new(config))),
    )
}
