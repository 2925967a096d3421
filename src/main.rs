use std::path::PathBuf;

use eframe::egui;

mod app;

use app::RecommenderApp;

/// Workbook path when none is given on the command line. Category images
/// live next to the workbook as `<label>.png`.
const DEFAULT_SOURCE: &str = "restaurants.xlsx";

fn main() {
    env_logger::init();

    let source = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 680.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Omakase — restaurant roulette",
        options,
        Box::new(move |_cc| Ok(Box::new(RecommenderApp::new(&source)))),
    )
    .expect("Failed to start Omakase");
}
