//! Recording fakes shared by unit tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::StatusUpdate;
use crate::feedback::Feedback;
use crate::processing::ToolRunner;
use crate::utils::{DzSaveError, DzSaveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

/// Remembers every dialog and status update in order.
#[derive(Default)]
pub struct RecordingFeedback {
    pub dialogs: Mutex<Vec<Shown>>,
    pub statuses: Mutex<Vec<StatusUpdate>>,
}

impl RecordingFeedback {
    fn push(&self, kind: DialogKind, title: &str, message: &str) {
        self.dialogs.lock().unwrap().push(Shown {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn dialogs(&self) -> Vec<Shown> {
        self.dialogs.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<StatusUpdate> {
        self.statuses.lock().unwrap().clone()
    }
}

impl Feedback for RecordingFeedback {
    fn info(&self, title: &str, message: &str) {
        self.push(DialogKind::Info, title, message);
    }

    fn warning(&self, title: &str, message: &str) {
        self.push(DialogKind::Warning, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.push(DialogKind::Error, title, message);
    }

    fn status(&self, update: StatusUpdate) {
        self.statuses.lock().unwrap().push(update);
    }
}

/// Stands in for vips, recording `(input, target)` per call.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: Mutex<Vec<(PathBuf, PathBuf)>>,
    /// Inputs whose conversion exits with status 1
    pub failing: Vec<PathBuf>,
}

impl FakeRunner {
    pub fn failing_on(inputs: &[&Path]) -> Self {
        Self {
            failing: inputs.iter().map(|p| p.to_path_buf()).collect(),
            ..Self::default()
        }
    }

    pub fn inputs(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().iter().map(|(input, _)| input.clone()).collect()
    }
}

impl ToolRunner for FakeRunner {
    async fn dzsave(&self, input: &Path, target: &Path) -> DzSaveResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((input.to_path_buf(), target.to_path_buf()));
        if self.failing.iter().any(|p| p == input) {
            return Err(DzSaveError::ToolFailed {
                code: Some(1),
                detail: "dzsave: unable to load image".to_string(),
            });
        }
        Ok(())
    }
}
