//! Startup: verify vips, then build the main window.
//!
//! The window is created only after `vips --version` succeeds. When the tool
//! is missing the user is pointed at the libvips install page and the
//! application exits without ever showing its controls.

use std::path::PathBuf;
use tauri::{AppHandle, DragDropEvent, Manager, WebviewUrl, WebviewWindowBuilder, WindowEvent};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tauri_plugin_opener::OpenerExt;
use tracing::{debug, error, info, warn};

use crate::core::AppState;
use crate::feedback::DialogFeedback;
use crate::processing::vips::VIPS_INSTALL_URL;
use crate::processing::VipsExecutor;
use crate::utils::{DzSaveError, DzSaveResult};

#[cfg(target_os = "macos")]
use window_vibrancy::{apply_vibrancy, NSVisualEffectMaterial};

pub const MAIN_WINDOW: &str = "main";

/// What startup has to do to the outside world.
pub trait StartupShell {
    fn open_main_window(&self) -> DzSaveResult<()>;
    fn report_missing_tool(&self, err: &DzSaveError);
    fn exit(&self, code: i32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupOutcome {
    /// Window is up; carries the reported vips version
    Ready(String),
    ToolMissing,
    WindowFailed,
}

/// Runs the installation check and either opens the window or exits.
pub async fn run_startup<S: StartupShell>(executor: &VipsExecutor, shell: &S) -> StartupOutcome {
    let version = match executor.check_installed().await {
        Ok(version) => version,
        Err(e) => {
            warn!("vips unavailable: {}", e);
            shell.report_missing_tool(&e);
            shell.exit(0);
            return StartupOutcome::ToolMissing;
        }
    };

    match shell.open_main_window() {
        Ok(()) => StartupOutcome::Ready(version),
        Err(e) => {
            error!("Failed to create main window: {}", e);
            shell.exit(1);
            StartupOutcome::WindowFailed
        }
    }
}

/// [`StartupShell`] backed by the running Tauri app.
pub struct TauriShell {
    app: AppHandle,
}

impl TauriShell {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl StartupShell for TauriShell {
    fn open_main_window(&self) -> DzSaveResult<()> {
        let window = WebviewWindowBuilder::new(&self.app, MAIN_WINDOW, WebviewUrl::App("index.html".into()))
            .title("VIPS DZSaver")
            .inner_size(450.0, 300.0)
            .build()?;

        #[cfg(target_os = "macos")]
        {
            // Requires macOSPrivateApi=true in tauri.conf.json
            if let Err(e) = apply_vibrancy(&window, NSVisualEffectMaterial::HudWindow, None, None) {
                warn!("Failed to apply vibrancy effect: {}", e);
            }
        }

        let app = self.app.clone();
        window.on_window_event(move |event| {
            if let WindowEvent::DragDrop(DragDropEvent::Drop { paths, .. }) = event {
                spawn_drop(app.clone(), paths.clone());
            }
        });

        info!("Main window ready");
        Ok(())
    }

    fn report_missing_tool(&self, err: &DzSaveError) {
        debug!("Installation check failed: {}", err);
        let message = format!(
            "VIPS is not installed on your system.\n\n\
             Please visit the libvips website to download and install VIPS:\n\n\
             <{VIPS_INSTALL_URL}>"
        );
        self.app
            .dialog()
            .message(message)
            .title("VIPS Not Installed")
            .kind(MessageDialogKind::Info)
            .blocking_show();

        if let Err(e) = self.app.opener().open_url(VIPS_INSTALL_URL, None::<&str>) {
            warn!("Failed to open {}: {}", VIPS_INSTALL_URL, e);
        }
    }

    fn exit(&self, code: i32) {
        info!("Exiting with code {}", code);
        self.app.exit(code);
    }
}

/// Hands native drop paths to the converter off the event loop thread.
fn spawn_drop(app: AppHandle, paths: Vec<PathBuf>) {
    debug!("Native drop of {} path(s)", paths.len());
    tauri::async_runtime::spawn(async move {
        let state = app.state::<AppState>();
        let feedback = DialogFeedback::new(app.clone());
        state.convert_dropped(&paths, &feedback).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::ToolConfig;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingShell {
        events: Mutex<Vec<String>>,
        window_fails: bool,
    }

    impl RecordingShell {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl StartupShell for RecordingShell {
        fn open_main_window(&self) -> DzSaveResult<()> {
            self.events.lock().unwrap().push("window".into());
            if self.window_fails {
                Err(DzSaveError::Window("no display".into()))
            } else {
                Ok(())
            }
        }

        fn report_missing_tool(&self, _err: &DzSaveError) {
            self.events.lock().unwrap().push("missing".into());
        }

        fn exit(&self, code: i32) {
            self.events.lock().unwrap().push(format!("exit {code}"));
        }
    }

    #[tokio::test]
    async fn missing_tool_never_opens_window() {
        let executor = VipsExecutor::new(ToolConfig::with_program("/nonexistent/dzsave-test/vips"));
        let shell = RecordingShell::default();

        let outcome = run_startup(&executor, &shell).await;
        assert_eq!(outcome, StartupOutcome::ToolMissing);
        assert_eq!(shell.events(), vec!["missing".to_string(), "exit 0".to_string()]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn installed_tool_opens_window() {
        let executor = VipsExecutor::new(ToolConfig::with_program("/bin/true"));
        let shell = RecordingShell::default();

        let outcome = run_startup(&executor, &shell).await;
        assert!(matches!(outcome, StartupOutcome::Ready(_)));
        assert_eq!(shell.events(), vec!["window".to_string()]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn window_failure_exits_with_error() {
        let executor = VipsExecutor::new(ToolConfig::with_program("/bin/true"));
        let shell = RecordingShell { window_fails: true, ..Default::default() };

        assert_eq!(run_startup(&executor, &shell).await, StartupOutcome::WindowFailed);
        assert_eq!(shell.events(), vec!["window".to_string(), "exit 1".to_string()]);
    }
}
