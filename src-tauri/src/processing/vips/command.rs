// src-tauri/src/processing/vips/command.rs

//! Command lines handed to the vips executable.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use super::config::ToolConfig;

/// A fully resolved vips invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VipsCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Child-only `PATH` override
    pub search_path: Option<OsString>,
}

impl VipsCommand {
    fn new(config: &ToolConfig, args: Vec<OsString>) -> Self {
        Self {
            program: config.executable(),
            args,
            search_path: config.search_path(),
        }
    }

    /// `vips --version`
    pub fn version(config: &ToolConfig) -> Self {
        Self::new(config, vec!["--version".into()])
    }

    /// `vips dzsave <input> <target>`
    pub fn dzsave(config: &ToolConfig, input: &Path, target: &Path) -> Self {
        Self::new(
            config,
            vec!["dzsave".into(), input.as_os_str().to_owned(), target.as_os_str().to_owned()],
        )
    }

    /// Builds the process with captured output and no console window.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(path) = &self.search_path {
            cmd.env("PATH", path);
        }

        #[cfg(windows)]
        {
            const CREATE_NO_WINDOW: u32 = 0x08000000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        cmd
    }
}

impl std::fmt::Display for VipsCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
