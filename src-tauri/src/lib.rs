// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod feedback;
pub mod processing;
pub mod intake;
pub mod startup;
pub mod commands;
#[cfg(test)]
mod testing;

use tauri::Manager;
use tracing::{debug, info};

// Public exports for external consumers
pub use crate::core::{AppState, ConversionReport, DropSummary, OutputDirectory, StatusUpdate};
pub use crate::intake::parse_drop_payload;
pub use crate::processing::{ToolConfig, VipsExecutor};
pub use crate::utils::{DzSaveError, DzSaveResult};
pub use commands::*;

/// Builds and runs the Tauri application.
///
/// No window exists until the vips installation check has passed.
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            handle_drop_payload,
            select_output_directory,
            reset_output_directory,
            get_output_directory,
        ])
        .setup(|app| {
            app.manage(AppState::new(ToolConfig::from_env()));
            debug!("✓ AppState initialized");

            // Check off the main thread: the missing-tool dialog blocks
            let app_handle = app.app_handle().clone();
            tauri::async_runtime::spawn(async move {
                let state = app_handle.state::<AppState>();
                let shell = startup::TauriShell::new(app_handle.clone());
                let outcome = startup::run_startup(state.executor(), &shell).await;
                debug!("Startup finished: {:?}", outcome);
            });

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    info!("Starting application event loop...");
    app.run(|_app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            info!("Application exiting");
        }
    });
}
