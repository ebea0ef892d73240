//! Tauri command for text drop payloads.

use tauri::State;
use tracing::debug;
use crate::core::{AppState, DropSummary};
use crate::feedback::DialogFeedback;
use crate::intake::parse_drop_payload;
use crate::utils::DzSaveResult;

/// Converts every file named in a drop payload.
///
/// Used for text payloads such as a pasted `file://` URI list; native window
/// drops go through the window's drag-drop event instead. Per-file problems
/// are reported through dialogs and tallied in the summary rather than
/// returned as errors.
#[tauri::command]
pub async fn handle_drop_payload(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
    payload: String,
) -> DzSaveResult<DropSummary> {
    let candidates = parse_drop_payload(&payload);
    debug!("Drop payload parsed into {} candidate(s)", candidates.len());

    let feedback = DialogFeedback::new(app);
    Ok(state.convert_dropped(&candidates, &feedback).await)
}
