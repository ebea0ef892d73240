//! Tauri commands for the output directory.

use tauri::State;
use tauri_plugin_dialog::DialogExt;
use crate::core::AppState;
use crate::feedback::DialogFeedback;
use crate::utils::{DzSaveError, DzSaveResult};

/// Opens a native directory chooser and applies the choice.
///
/// Cancelling falls back to the default directory. Returns the directory now in effect.
#[tauri::command]
pub async fn select_output_directory(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> DzSaveResult<String> {
    let picked = app
        .dialog()
        .file()
        .set_title("Select Output Directory")
        .blocking_pick_folder()
        .map(|dir| dir.into_path().map_err(|e| DzSaveError::dialog(e.to_string())))
        .transpose()?;

    let dir = state.select_output_dir(picked, &DialogFeedback::new(app));
    Ok(dir.as_path().display().to_string())
}

/// Restores the default output directory.
#[tauri::command]
pub async fn reset_output_directory(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> DzSaveResult<String> {
    let dir = state.reset_output_dir(&DialogFeedback::new(app));
    Ok(dir.as_path().display().to_string())
}

#[tauri::command]
pub fn get_output_directory(state: State<'_, AppState>) -> String {
    state.output_dir().as_path().display().to_string()
}
