//! Core application types and state management.
//!
//! - [`AppState`]: Application state managed by Tauri
//! - [`OutputDirectory`]: Where pyramids are written, defaulting to `dzi_output`
//! - [`ConversionReport`], [`DropSummary`], [`StatusUpdate`]: Results sent to the frontend

mod output_dir;
mod state;
mod types;

pub use output_dir::{output_target, OutputDirectory, Selection, DEFAULT_OUTPUT_DIR};
pub use state::AppState;
pub use types::{ConversionReport, DropSummary, StatusUpdate};
