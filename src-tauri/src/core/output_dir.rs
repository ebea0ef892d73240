//! Output directory state.

use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::utils::{DzSaveError, DzSaveResult};

/// Directory used when the user has not picked one, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dzi_output";

/// Where dzsave pyramids are written.
///
/// Never empty: cancelling a selection or resetting falls back to
/// [`DEFAULT_OUTPUT_DIR`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDirectory(PathBuf);

/// What a directory-chooser result did to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user picked this directory
    Chosen(PathBuf),
    /// The chooser was dismissed; the default is back in effect
    Cancelled,
}

impl Default for OutputDirectory {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

impl OutputDirectory {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Applies the result of a directory chooser.
    pub fn apply_selection(&mut self, picked: Option<PathBuf>) -> Selection {
        match picked.filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => {
                self.0 = dir.clone();
                Selection::Chosen(dir)
            }
            None => {
                self.reset();
                Selection::Cancelled
            }
        }
    }

    pub fn reset(&mut self) {
        self.0 = PathBuf::from(DEFAULT_OUTPUT_DIR);
    }

    /// `<dir>/<input stem>`; vips appends `.dzi` and `_files` itself.
    pub fn target_for(&self, input: &Path) -> DzSaveResult<PathBuf> {
        output_target(&self.0, input)
    }
}

/// Derives the dzsave output target for `input` inside `dir`.
pub fn output_target(dir: &Path, input: &Path) -> DzSaveResult<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(DzSaveError::OutputDirectoryUnset);
    }
    let stem = input
        .file_stem()
        .ok_or_else(|| DzSaveError::IO(format!("No file name in {}", input.display())))?;
    Ok(dir.join(stem))
}
