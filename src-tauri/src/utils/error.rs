//! Error types for the dzsave front end.
//!
//! Every error is serializable so Tauri commands can hand it straight to the
//! web UI. Only [`DzSaveError::ToolNotInstalled`] ends the application; all
//! other kinds are reported per file and processing carries on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Input path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// Nothing exists at the path
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Path exists but is a directory or special file
    #[error("Not a file: {}", .0.display())]
    NotFile(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the application.
#[derive(Error, Debug, Serialize)]
pub enum DzSaveError {
    /// The external tool could not be started or did not answer `--version`
    #[error("{tool} is not installed: {reason}")]
    ToolNotInstalled { tool: String, reason: String },

    /// A dropped candidate is not a regular file
    #[error(transparent)]
    Path(#[from] PathError),

    /// No output directory to write into
    #[error("Output directory not set")]
    OutputDirectoryUnset,

    /// The tool ran and exited unsuccessfully
    #[error("{}", format_tool_failure(.code, .detail))]
    ToolFailed { code: Option<i32>, detail: String },

    /// The tool process could not be spawned
    #[error("Failed to launch {tool}: {reason}")]
    Launch { tool: String, reason: String },

    /// The tool did not finish within the allowed time
    #[error("{tool} did not respond within {millis}ms")]
    Timeout { tool: String, millis: u64 },

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Native dialog failure
    #[error("Dialog error: {0}")]
    Dialog(String),

    /// Window creation or webview failure
    #[error("Window error: {0}")]
    Window(String),
}

/// Convenience result type.
pub type DzSaveResult<T> = Result<T, DzSaveError>;

fn format_tool_failure(code: &Option<i32>, detail: &str) -> String {
    let status = match code {
        Some(code) => format!("vips exited with status {code}"),
        None => "vips was terminated by a signal".to_string(),
    };
    if detail.is_empty() {
        status
    } else {
        format!("{status}: {detail}")
    }
}

impl DzSaveError {
    pub fn tool_not_installed(tool: impl Into<String>, reason: impl ToString) -> Self {
        Self::ToolNotInstalled { tool: tool.into(), reason: reason.to_string() }
    }

    pub fn launch(tool: impl Into<String>, reason: impl ToString) -> Self {
        Self::Launch { tool: tool.into(), reason: reason.to_string() }
    }

    pub fn dialog<T: Into<String>>(msg: T) -> Self {
        Self::Dialog(msg.into())
    }
}

impl PathError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotFile(path.into())
    }
}

impl From<tauri::Error> for DzSaveError {
    fn from(err: tauri::Error) -> Self {
        Self::Window(err.to_string())
    }
}

// Convert std::io::Error to DzSaveError
impl From<io::Error> for DzSaveError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err: DzSaveError = PathError::not_found("/tmp/missing.jpg").into();
        assert_eq!(err.to_string(), "File not found: /tmp/missing.jpg");
    }

    #[test]
    fn tool_failure_includes_code_and_detail() {
        let err = DzSaveError::ToolFailed {
            code: Some(1),
            detail: "VipsForeignLoad: file is not in a known format".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exited with status 1"), "got: {msg}");
        assert!(msg.contains("not in a known format"), "got: {msg}");
    }

    #[test]
    fn tool_failure_without_detail_or_code() {
        let err = DzSaveError::ToolFailed { code: None, detail: String::new() };
        assert_eq!(err.to_string(), "vips was terminated by a signal");
    }

    #[test]
    fn timeout_reports_milliseconds() {
        let err = DzSaveError::Timeout { tool: "vips".into(), millis: 300 };
        assert_eq!(err.to_string(), "vips did not respond within 300ms");
    }

    #[test]
    fn serializes_for_the_frontend() {
        let json = serde_json::to_value(DzSaveError::OutputDirectoryUnset).unwrap();
        assert_eq!(json, serde_json::json!("OutputDirectoryUnset"));
    }
}
