//! Heatbrush GUI application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod message;
mod state;
mod ui;
mod util;
mod viewer;
mod workers;

use std::path::PathBuf;

use app::HeatbrushApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional base image path; otherwise the user opens one from the panel.
    let initial_image = std::env::args().nth(1).map(PathBuf::from);

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Heatbrush",
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx);
            let mut app = HeatbrushApp::default();
            if let Some(path) = initial_image {
                app.load_image(path);
            }
            Ok(Box::new(app))
        }),
    )
}
