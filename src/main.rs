#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based ASR research dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use asrdash::egui_app::controller::DashboardController;
use asrdash::egui_app::ui::{APP_TITLE, EguiApp, MIN_VIEWPORT_SIZE};
use asrdash::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let controller = DashboardController::load();
    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size([1280.0, 860.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    tracing::info!("Dashboard closed");
    Ok(())
}
