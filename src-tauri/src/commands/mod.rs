//! Tauri command handlers for the frontend.
//!
//! - [`handle_drop_payload`]: Convert every file named in a text drop payload
//! - [`select_output_directory`]: Pick the output directory with a native chooser
//! - [`reset_output_directory`]: Go back to `dzi_output`
//! - [`get_output_directory`]: Current output directory for display

mod drops;
mod output_dir;

pub use drops::*;
pub use output_dir::*;
