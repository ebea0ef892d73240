// src-tauri/src/processing/vips/mod.rs

//! The vips command-line tool as an external collaborator.
//!
//! # Architecture
//!
//! - [`ToolConfig`]: Locates the executable and its install directory.
//! - [`VipsCommand`]: Builds `vips --version` and `vips dzsave` command lines.
//! - [`VipsExecutor`]: Spawns them, bounding the version query with a timeout.

mod command;
mod config;
mod executor;

pub use command::VipsCommand;
pub use config::{ToolConfig, VIPS_INSTALL_URL};
pub use executor::VipsExecutor;
