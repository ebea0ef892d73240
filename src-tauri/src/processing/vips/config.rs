// src-tauri/src/processing/vips/config.rs

//! Locating the vips command-line tool.
//!
//! vips is looked up in this order:
//!
//! 1. `VIPS_DIR` (an install root; its `bin/` is used when present)
//! 2. well-known install locations that contain the executable
//! 3. the inherited `PATH`
//!
//! Whatever directory is found is prepended to `PATH` for the child process
//! only; the application's own environment is never modified.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Where users are sent when vips is missing.
pub const VIPS_INSTALL_URL: &str = "https://libvips.github.io/libvips/install.html";

/// Upper bound for `vips --version` at startup.
pub const VERSION_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_PROGRAM: &str = "vips";

/// How to find and call the vips executable.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Program name or path
    pub program: String,
    /// Directory holding the executable, prepended to the child's `PATH`
    pub install_dir: Option<PathBuf>,
    /// Bound for the startup version query
    pub version_timeout: Duration,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            install_dir: None,
            version_timeout: VERSION_CHECK_TIMEOUT,
        }
    }
}

impl ToolConfig {
    /// Resolves the install directory from `VIPS_DIR` and known locations.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let vips_dir = env::var_os("VIPS_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        config.install_dir = resolve_install_dir(vips_dir, &known_install_dirs(), &config.program);

        match &config.install_dir {
            Some(dir) => debug!("Using vips from {}", dir.display()),
            None => debug!("No vips install directory found, relying on PATH"),
        }
        config
    }

    /// Config that calls `program` directly, with no install directory.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Display name for dialogs and logs.
    pub fn tool_name(&self) -> String {
        Path::new(&self.program)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.clone())
    }

    /// Absolute executable when it sits in the install directory, else the bare program.
    pub fn executable(&self) -> PathBuf {
        if let Some(dir) = &self.install_dir {
            let candidate = dir.join(executable_file_name(&self.program));
            if candidate.is_file() {
                return candidate;
            }
        }
        PathBuf::from(&self.program)
    }

    /// `PATH` for the child process, or `None` to inherit it unchanged.
    pub fn search_path(&self) -> Option<OsString> {
        self.search_path_with(env::var_os("PATH"))
    }

    fn search_path_with(&self, inherited: Option<OsString>) -> Option<OsString> {
        let dir = self.install_dir.as_ref()?;
        let mut dirs = vec![dir.clone()];
        if let Some(inherited) = inherited {
            dirs.extend(env::split_paths(&inherited));
        }
        env::join_paths(dirs).ok()
    }
}

fn executable_file_name(program: &str) -> String {
    if cfg!(windows) && Path::new(program).extension().is_none() {
        format!("{program}.exe")
    } else {
        program.to_string()
    }
}

fn bin_dir_of(root: PathBuf) -> PathBuf {
    let bin = root.join("bin");
    if bin.is_dir() { bin } else { root }
}

/// Picks the explicit root when given, otherwise the first candidate holding `program`.
fn resolve_install_dir(
    vips_dir: Option<PathBuf>,
    candidates: &[PathBuf],
    program: &str,
) -> Option<PathBuf> {
    if let Some(root) = vips_dir {
        return Some(bin_dir_of(root));
    }
    let exe = executable_file_name(program);
    candidates.iter().find(|dir| dir.join(&exe).is_file()).cloned()
}

// GUI launches on macOS don't inherit the shell PATH, so Homebrew dirs are listed explicitly.
fn known_install_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if cfg!(windows) {
        if let Some(program_files) = env::var_os("ProgramFiles") {
            dirs.push(PathBuf::from(program_files).join("vips").join("bin"));
        }
        dirs.push(PathBuf::from(r"C:\vips\bin"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/opt/homebrew/bin"));
        dirs.push(PathBuf::from("/usr/local/bin"));
    }
    dirs
}
