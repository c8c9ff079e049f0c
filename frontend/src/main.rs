#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

mod app;
mod input;
mod layout;

use app::App;

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Pathfinding Visualizer"),
        ..Default::default()
    };
    eframe::run_native(
        "Pathfinding Visualizer",
        native_options,
        Box::new(|cc| Box::new(App::new(cc))),
    )
}
