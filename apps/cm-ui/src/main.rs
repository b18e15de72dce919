#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod palette;
mod views;

use app::CarbonMapApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("UK Carbon Intensity Map"),
        ..Default::default()
    };

    eframe::run_native(
        "UK Carbon Intensity Map",
        options,
        Box::new(|cc| Ok(Box::new(CarbonMapApp::new(cc)))),
    )
}
