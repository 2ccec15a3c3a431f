use eframe::egui;
use log::{error, info};

mod app;
mod backend;
mod ui;

use app::TraderConsoleApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Trader Console egui application");

    // Create window options sized for the trader table plus edit dialogs
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("Trader Console")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Trader Console",
        options,
        Box::new(|cc| {
            // Enable persistence for window state
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            // Initialize the app
            match TraderConsoleApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Trader Console app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
