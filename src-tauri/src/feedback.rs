//! User-facing feedback: modal dialogs and the status label.
//!
//! Dialogs are the error channel of the application, so every per-file
//! problem ends up here. The Tauri implementation blocks until the user
//! dismisses the dialog, which keeps multi-file drops strictly sequential.
//! It must therefore never be called from the main thread.

use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tracing::warn;

use crate::core::StatusUpdate;

/// Event carrying [`StatusUpdate`] payloads to the frontend.
pub const STATUS_EVENT: &str = "status-changed";

/// Sink for dialogs and status label updates.
pub trait Feedback {
    fn info(&self, title: &str, message: &str);
    fn warning(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
    fn status(&self, update: StatusUpdate);
}

/// Native dialogs through `tauri-plugin-dialog`, status through a window event.
#[derive(Clone)]
pub struct DialogFeedback {
    app: AppHandle,
}

impl DialogFeedback {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn show(&self, kind: MessageDialogKind, title: &str, message: &str) {
        self.app
            .dialog()
            .message(message)
            .title(title)
            .kind(kind)
            .blocking_show();
    }
}

impl Feedback for DialogFeedback {
    fn info(&self, title: &str, message: &str) {
        self.show(MessageDialogKind::Info, title, message);
    }

    fn warning(&self, title: &str, message: &str) {
        self.show(MessageDialogKind::Warning, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.show(MessageDialogKind::Error, title, message);
    }

    fn status(&self, update: StatusUpdate) {
        if let Err(e) = self.app.emit(STATUS_EVENT, update) {
            warn!("Failed to emit status update: {}", e);
        }
    }
}
