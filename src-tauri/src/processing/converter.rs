//! One image → Deep Zoom conversion, including its user feedback.

use std::future::Future;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::{output_target, ConversionReport, StatusUpdate};
use crate::feedback::Feedback;
use crate::utils::{display_name, ensure_dir, DzSaveError, DzSaveResult};

/// Something that can run `dzsave` for a single input.
pub trait ToolRunner {
    /// Writes `<target>.dzi` and `<target>_files/` for `input`.
    fn dzsave(&self, input: &Path, target: &Path) -> impl Future<Output = DzSaveResult<()>> + Send;
}

/// Converts `input` into a pyramid under `output_dir`.
///
/// Reports the outcome through `feedback` before returning it. An unset
/// output directory aborts only this conversion. `output_dir` is only read.
pub async fn convert_image<R, F>(
    input: &Path,
    output_dir: &Path,
    runner: &R,
    feedback: &F,
) -> DzSaveResult<ConversionReport>
where
    R: ToolRunner,
    F: Feedback,
{
    let target = match output_target(output_dir, input) {
        Ok(target) => target,
        Err(DzSaveError::OutputDirectoryUnset) => {
            warn!("Skipping {}: no output directory", display_name(input));
            feedback.warning(
                "Output Directory Not Set",
                "Please select an output directory first.",
            );
            return Err(DzSaveError::OutputDirectoryUnset);
        }
        Err(e) => {
            report_failure(input, &e, feedback);
            return Err(e);
        }
    };

    debug!("Converting {} -> {}", input.display(), target.display());

    let result = match ensure_dir(output_dir).await {
        Ok(()) => runner.dzsave(input, &target).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            let report = ConversionReport::new(input, &target);
            feedback.info(
                "Success",
                &format!(
                    "Processed {} and saved to {}",
                    input.display(),
                    report.descriptor.display()
                ),
            );
            feedback.status(StatusUpdate::processed(&report));
            Ok(report)
        }
        Err(e) => {
            report_failure(input, &e, feedback);
            Err(e)
        }
    }
}

fn report_failure<F: Feedback>(input: &Path, err: &DzSaveError, feedback: &F) {
    let detail = err.to_string();
    feedback.error("Error", &format!("Error executing vips dzsave command: {detail}"));
    feedback.status(StatusUpdate::failed(input, &detail));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DialogKind, FakeRunner, RecordingFeedback};

    #[tokio::test]
    async fn success_reports_dzi_descriptor() {
        let out = tempfile::tempdir().unwrap();
        let runner = FakeRunner::default();
        let feedback = RecordingFeedback::default();

        let report = convert_image(Path::new("/pics/photo.jpg"), out.path(), &runner, &feedback)
            .await
            .unwrap();

        assert_eq!(report.target, out.path().join("photo"));
        assert_eq!(report.descriptor, out.path().join("photo.dzi"));
        assert_eq!(
            runner.calls.lock().unwrap().clone(),
            vec![(Path::new("/pics/photo.jpg").to_path_buf(), out.path().join("photo"))]
        );

        let dialogs = feedback.dialogs();
        assert_eq!(dialogs.len(), 1);
        assert_eq!(dialogs[0].kind, DialogKind::Info);
        assert_eq!(dialogs[0].title, "Success");
        assert!(dialogs[0].message.ends_with("photo.dzi"), "got: {}", dialogs[0].message);

        let statuses = feedback.statuses();
        assert_eq!(statuses.len(), 1);
        assert!(statuses[0].text.starts_with("Processed /pics/photo.jpg"));
    }

    #[tokio::test]
    async fn creates_missing_output_directory() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("dzi_output");
        let feedback = RecordingFeedback::default();

        convert_image(Path::new("a.png"), &out, &FakeRunner::default(), &feedback)
            .await
            .unwrap();
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn unset_directory_warns_without_running_tool() {
        let runner = FakeRunner::default();
        let feedback = RecordingFeedback::default();

        let err = convert_image(Path::new("photo.jpg"), Path::new(""), &runner, &feedback)
            .await
            .unwrap_err();

        assert!(matches!(err, DzSaveError::OutputDirectoryUnset));
        assert!(runner.inputs().is_empty());
        let dialogs = feedback.dialogs();
        assert_eq!(dialogs.len(), 1);
        assert_eq!(dialogs[0].kind, DialogKind::Warning);
        assert_eq!(dialogs[0].title, "Output Directory Not Set");
        assert!(feedback.statuses().is_empty());
    }

    #[tokio::test]
    async fn tool_failure_surfaces_detail() {
        let out = tempfile::tempdir().unwrap();
        let input = Path::new("/pics/broken.jpg");
        let runner = FakeRunner::failing_on(&[input]);
        let feedback = RecordingFeedback::default();

        let err = convert_image(input, out.path(), &runner, &feedback).await.unwrap_err();
        assert!(matches!(err, DzSaveError::ToolFailed { code: Some(1), .. }));

        let dialogs = feedback.dialogs();
        assert_eq!(dialogs.len(), 1);
        assert_eq!(dialogs[0].kind, DialogKind::Error);
        assert!(dialogs[0].message.contains("unable to load image"), "got: {}", dialogs[0].message);

        let statuses = feedback.statuses();
        assert_eq!(statuses.len(), 1);
        assert!(statuses[0].text.starts_with("Error processing /pics/broken.jpg"));
        assert!(statuses[0].text.contains("unable to load image"));
    }
}
