// src-tauri/src/processing/vips/executor.rs

//! Runs the vips executable as a child process.

use std::path::Path;
use std::process::Output;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::processing::converter::ToolRunner;
use crate::utils::{DzSaveError, DzSaveResult};

use super::command::VipsCommand;
use super::config::ToolConfig;

/// Executor for `vips` subprocesses.
#[derive(Debug, Clone)]
pub struct VipsExecutor {
    config: ToolConfig,
}

impl VipsExecutor {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Runs `vips --version` within the configured timeout.
    ///
    /// Returns the reported version line. Any failure, including a hang,
    /// means the tool is treated as not installed.
    pub async fn check_installed(&self) -> DzSaveResult<String> {
        let tool = self.config.tool_name();
        let cmd = VipsCommand::version(&self.config);
        debug!("Checking installation: {cmd}");

        let child = cmd
            .to_command()
            .spawn()
            .map_err(|e| DzSaveError::tool_not_installed(&tool, e))?;

        // kill_on_drop reaps the child when the timeout drops the future
        let output = match tokio::time::timeout(self.config.version_timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| DzSaveError::tool_not_installed(&tool, e))?,
            Err(_) => {
                let timeout = DzSaveError::Timeout {
                    tool: tool.clone(),
                    millis: self.config.version_timeout.as_millis() as u64,
                };
                return Err(DzSaveError::tool_not_installed(&tool, timeout));
            }
        };

        if !output.status.success() {
            return Err(DzSaveError::tool_not_installed(&tool, failure_from(&output)));
        }

        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        info!("Found {tool}: {version}");
        Ok(version)
    }

    /// Runs `vips dzsave <input> <target>` to completion.
    pub async fn run_dzsave(&self, input: &Path, target: &Path) -> DzSaveResult<()> {
        let cmd = VipsCommand::dzsave(&self.config, input, target);
        debug!("Spawning: {cmd}");
        let start = Instant::now();

        let output = cmd
            .to_command()
            .output()
            .await
            .map_err(|e| DzSaveError::launch(self.config.tool_name(), e))?;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        if output.status.success() {
            info!("dzsave finished for {} in {elapsed_ms}ms", input.display());
            Ok(())
        } else {
            let err = failure_from(&output);
            error!("dzsave failed for {} after {elapsed_ms}ms: {err}", input.display());
            Err(err)
        }
    }
}

impl ToolRunner for VipsExecutor {
    async fn dzsave(&self, input: &Path, target: &Path) -> DzSaveResult<()> {
        self.run_dzsave(input, target).await
    }
}

/// Turns a failed exit into [`DzSaveError::ToolFailed`], preferring stderr for detail.
fn failure_from(output: &Output) -> DzSaveError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let detail = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr.trim().to_string()
    };
    DzSaveError::ToolFailed {
        code: output.status.code(),
        detail,
    }
}
