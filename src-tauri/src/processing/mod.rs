pub mod converter;
pub mod vips;

pub use converter::{convert_image, ToolRunner};
pub use vips::{ToolConfig, VipsExecutor};
