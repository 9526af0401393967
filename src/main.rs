mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::SalesBoardApp;
use eframe::egui;

/// Loaded at startup when present in the working directory.
const DEFAULT_DATA_FILE: &str = "ecommerce_data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Board – E-commerce Report",
        options,
        Box::new(|_cc| {
            let mut app = SalesBoardApp::default();
            let default_file = Path::new(DEFAULT_DATA_FILE);
            if default_file.exists() {
                app.state.load_path(default_file);
            }
            Ok(Box::new(app))
        }),
    )
}
