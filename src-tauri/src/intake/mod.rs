//! Turning drag-and-drop input into conversions.
//!
//! - [`parse_drop_payload`]: Splits a text drop payload into candidate paths
//! - [`handle_dropped_paths`]: Validates candidates and converts them one by one

mod handler;
mod payload;

pub use handler::handle_dropped_paths;
pub use payload::parse_drop_payload;
