use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::DropSummary;
use crate::feedback::Feedback;
use crate::processing::{convert_image, ToolRunner};
use crate::utils::validate_input_file;

/// Converts each candidate in order, one at a time.
///
/// A candidate that is not an existing regular file gets an error dialog and
/// is skipped; neither that nor a failed conversion stops later candidates.
pub async fn handle_dropped_paths<R, F>(
    candidates: &[PathBuf],
    output_dir: &Path,
    runner: &R,
    feedback: &F,
) -> DropSummary
where
    R: ToolRunner,
    F: Feedback,
{
    let mut summary = DropSummary::default();

    for candidate in candidates {
        if let Err(e) = validate_input_file(candidate).await {
            warn!("Rejected dropped path: {}", e);
            feedback.error("Error", &e.to_string());
            summary.skipped.push(candidate.clone());
            continue;
        }

        match convert_image(candidate, output_dir, runner, feedback).await {
            Ok(report) => summary.converted.push(report),
            Err(_) => summary.failed.push(candidate.clone()),
        }
    }

    info!(
        "Drop handled: {} converted, {} skipped, {} failed",
        summary.converted.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    summary
}
