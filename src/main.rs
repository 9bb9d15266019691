// Cadence Calendar
// Main entry point

use cadence_calendar::ui_egui::CadenceApp;
use env_logger::Env;

fn main() -> eframe::Result<()> {
    // Initialize logging, defaulting to info when RUST_LOG is unset
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    log::info!("Starting Cadence Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cadence Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cadence Calendar",
        options,
        Box::new(|cc| Ok(Box::new(CadenceApp::new(cc)))),
    )
}
