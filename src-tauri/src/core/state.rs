//! Application state management for Tauri.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::core::{DropSummary, OutputDirectory, Selection, DEFAULT_OUTPUT_DIR};
use crate::feedback::Feedback;
use crate::intake::handle_dropped_paths;
use crate::processing::{ToolConfig, VipsExecutor};

/// Application state managed by Tauri.
///
/// Owns the output directory and the vips executor. Drops are converted one
/// pass at a time: a second drop waits until the first has finished,
/// dialogs included.
pub struct AppState {
    output_dir: Mutex<OutputDirectory>,
    executor: VipsExecutor,
    conversions: tokio::sync::Mutex<()>,
}

impl AppState {
    pub fn new(config: ToolConfig) -> Self {
        debug!("AppState using vips at {}", config.executable().display());
        Self {
            output_dir: Mutex::new(OutputDirectory::default()),
            executor: VipsExecutor::new(config),
            conversions: tokio::sync::Mutex::new(()),
        }
    }

    pub fn executor(&self) -> &VipsExecutor {
        &self.executor
    }

    /// Snapshot of the current output directory.
    pub fn output_dir(&self) -> OutputDirectory {
        self.lock_output_dir().clone()
    }

    fn lock_output_dir(&self) -> MutexGuard<'_, OutputDirectory> {
        // Plain data; a panic elsewhere cannot leave it half-written
        self.output_dir.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies a directory-chooser result and tells the user what happened.
    pub fn select_output_dir<F: Feedback>(&self, picked: Option<PathBuf>, feedback: &F) -> OutputDirectory {
        let selection = self.lock_output_dir().apply_selection(picked);
        match selection {
            Selection::Chosen(dir) => {
                info!("Output directory set to {}", dir.display());
                feedback.info(
                    "Selected Directory",
                    &format!("Output directory set to: {}", dir.display()),
                );
            }
            Selection::Cancelled => {
                info!("Directory selection cancelled, using default");
                feedback.warning(
                    "No Directory Selected",
                    &format!("No output directory selected. Using default: '{DEFAULT_OUTPUT_DIR}'"),
                );
            }
        }
        self.output_dir()
    }

    /// Restores the default output directory.
    pub fn reset_output_dir<F: Feedback>(&self, feedback: &F) -> OutputDirectory {
        self.lock_output_dir().reset();
        info!("Output directory reset to default");
        feedback.info("RESET", "The output directory has been reset to default");
        self.output_dir()
    }

    /// Converts one drop's candidates after any earlier drop has finished.
    pub async fn convert_dropped<F: Feedback>(&self, candidates: &[PathBuf], feedback: &F) -> DropSummary {
        let _turn = self.conversions.lock().await;
        let output_dir = self.output_dir();
        debug!("Handling {} dropped path(s) into {}", candidates.len(), output_dir.as_path().display());
        handle_dropped_paths(candidates, output_dir.as_path(), &self.executor, feedback).await
    }
}
