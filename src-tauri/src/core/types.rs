//! Payload types passed between the converter and the frontend.

use std::path::{Path, PathBuf};
use serde::Serialize;

/// Outcome of one successful `vips dzsave` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    /// Source image
    pub input: PathBuf,
    /// Target handed to vips, without extension
    pub target: PathBuf,
    /// `<target>.dzi` descriptor written by vips
    pub descriptor: PathBuf,
    /// `<target>_files` tile directory written by vips
    pub tiles_dir: PathBuf,
}

impl ConversionReport {
    pub fn new(input: &Path, target: &Path) -> Self {
        let mut descriptor = target.as_os_str().to_owned();
        descriptor.push(".dzi");
        let mut tiles_dir = target.as_os_str().to_owned();
        tiles_dir.push("_files");

        Self {
            input: input.to_path_buf(),
            target: target.to_path_buf(),
            descriptor: descriptor.into(),
            tiles_dir: tiles_dir.into(),
        }
    }
}

/// Per-drop tally, in payload order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropSummary {
    pub converted: Vec<ConversionReport>,
    /// Candidates that were not existing regular files
    pub skipped: Vec<PathBuf>,
    /// Candidates whose conversion failed
    pub failed: Vec<PathBuf>,
}

/// Status label contents, emitted as the `status-changed` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub text: String,
    /// Switch the label to its smaller font
    pub compact: bool,
}

impl StatusUpdate {
    pub fn processed(report: &ConversionReport) -> Self {
        Self {
            text: format!(
                "Processed {} and saved to {}",
                report.input.display(),
                report.descriptor.display()
            ),
            compact: true,
        }
    }

    pub fn failed(input: &Path, detail: &str) -> Self {
        Self {
            text: format!("Error processing {}: {}", input.display(), detail),
            compact: true,
        }
    }
}
