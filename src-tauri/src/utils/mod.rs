pub mod error;
pub mod fs;

pub use error::{DzSaveError, DzSaveResult, PathError};
pub use fs::{display_name, ensure_dir, validate_input_file};
